//! Test helpers module
//!
//! Shared fixtures for the integration tests: a catalog with English and
//! Brazilian Portuguese data, and a translator pinned to UTC.

#![allow(dead_code)]

use std::sync::Once;
use serde_json::{json, Value};
use tongues::{TranslationTree, Translator, Zone};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// English catalog
pub fn english() -> Value {
    json!({
        "greetings": {
            "hello": "Hello {{name}}",
            "welcome": "Welcome back, {{first}} {{last}}!",
            "plain": "Hi there"
        },
        "inbox": {
            "zero": "none",
            "one": "1 item",
            "other": "{{count}} items"
        },
        "cart": {
            "none": "Your cart is empty",
            "other": "{{count}} products in your cart"
        },
        "broken": {
            "other": "{{count}} things"
        },
        "date": {
            "day_names": ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
            "abbr_day_names": ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            "month_names": [null, "January", "February", "March", "April", "May", "June",
                            "July", "August", "September", "October", "November", "December"],
            "abbr_month_names": [null, "Jan", "Feb", "Mar", "Apr", "May", "Jun",
                                 "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
            "formats": {
                "default": "%Y-%m-%d",
                "short": "%b %-d",
                "long": "%A, %B %d, %Y"
            }
        },
        "time": {
            "formats": {
                "default": "%a, %d %b %Y %H:%M:%S %z",
                "short": "%-I:%M %p"
            }
        }
    })
}

/// Brazilian Portuguese catalog
pub fn portuguese() -> Value {
    json!({
        "greetings": {
            "hello": "Olá {{name}}"
        },
        "inbox": {
            "zero": "nenhum item",
            "one": "1 item",
            "other": "{{count}} itens"
        },
        "date": {
            "day_names": ["domingo", "segunda-feira", "terça-feira", "quarta-feira",
                          "quinta-feira", "sexta-feira", "sábado"],
            "abbr_day_names": ["dom", "seg", "ter", "qua", "qui", "sex", "sáb"],
            "month_names": [null, "janeiro", "fevereiro", "março", "abril", "maio", "junho",
                            "julho", "agosto", "setembro", "outubro", "novembro", "dezembro"],
            "abbr_month_names": [null, "jan", "fev", "mar", "abr", "mai", "jun",
                                 "jul", "ago", "set", "out", "nov", "dez"],
            "formats": {
                "default": "%d/%m/%Y",
                "long": "%A, %-d de %B de %Y"
            }
        },
        "time": {
            "am": "da manhã",
            "pm": "da tarde",
            "formats": {
                "short": "%-I:%M %p"
            }
        },
        "number": {
            "format": {
                "precision": 2,
                "separator": ",",
                "delimiter": "."
            },
            "currency": {
                "format": {
                    "unit": "R$",
                    "format": "%u %n"
                }
            },
            "percentage": {
                "format": {
                    "precision": 1
                }
            }
        }
    })
}

/// Catalog holding every fixture locale
pub fn test_catalog() -> TranslationTree {
    TranslationTree::from_value(json!({
        "en": english(),
        "pt-BR": portuguese()
    }))
    .expect("fixture catalog is valid")
}

/// Translator over the fixture catalog, displaying dates in UTC
pub fn test_translator() -> Translator {
    init_test_env();
    Translator::default()
        .with_translations(test_catalog())
        .with_zone(Zone::utc())
}
