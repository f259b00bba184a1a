//! Process-wide translator
//!
//! Convenience functions over a single shared [`Translator`] for call sites
//! that do not want to pass one around. Reads take a shared lock, so locale
//! changes are visible to every later call.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::config::I18nConfig;
use crate::utils::errors::Result;
use super::catalog::{Node, TranslationTree};
use super::lookup::Scope;
use super::options::Options;
use super::translator::{Localizable, Translation, Translator};

static TRANSLATOR: OnceLock<RwLock<Translator>> = OnceLock::new();

fn shared() -> &'static RwLock<Translator> {
    TRANSLATOR.get_or_init(|| RwLock::new(Translator::default()))
}

fn read() -> RwLockReadGuard<'static, Translator> {
    shared().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Translator> {
    shared().write().unwrap_or_else(PoisonError::into_inner)
}

/// Apply locale and zone settings, keeping the installed catalog
pub fn configure(config: &I18nConfig) -> Result<()> {
    let configured = Translator::new(config)?;
    let mut translator = write();
    let translations = translator.translations().clone();
    *translator = configured.with_translations(translations);
    Ok(())
}

/// Replace the shared translator with a fresh default one
pub fn reset() {
    *write() = Translator::default();
}

/// Run `f` with read access to the shared translator
pub fn with_translator<R>(f: impl FnOnce(&Translator) -> R) -> R {
    f(&read())
}

pub fn set_translations(translations: TranslationTree) {
    write().set_translations(translations);
}

pub fn set_locale(locale: impl Into<String>) {
    write().set_locale(locale);
}

pub fn clear_locale() {
    write().clear_locale();
}

pub fn locale() -> Option<String> {
    read().locale().map(str::to_string)
}

pub fn set_default_locale(locale: impl Into<String>) {
    write().set_default_locale(locale);
}

pub fn default_locale() -> String {
    read().default_locale().to_string()
}

pub fn current_locale() -> String {
    read().current_locale().to_string()
}

pub fn lookup(scope: impl Into<Scope>, options: &Options) -> Option<Node> {
    read().lookup(scope, options)
}

pub fn translate(scope: impl Into<Scope>, options: &Options) -> Translation {
    read().translate(scope, options)
}

pub fn t(scope: impl Into<Scope>, options: &Options) -> Translation {
    translate(scope, options)
}

pub fn pluralize(count: impl Into<f64>, scope: impl Into<Scope>, options: &Options) -> String {
    read().pluralize(count, scope, options)
}

pub fn p(count: impl Into<f64>, scope: impl Into<Scope>, options: &Options) -> String {
    pluralize(count, scope, options)
}

pub fn localize(scope: &str, value: impl Into<Localizable>) -> String {
    read().localize(scope, value)
}

pub fn l(scope: &str, value: impl Into<Localizable>) -> String {
    localize(scope, value)
}
