//! Predefined filter presets for common queries.
//!
//! A preset is a named list of filter expressions applied as if each had
//! been passed with `-F`, combined under the invocation's AND/OR setting.

/// A named, predefined filter combination.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub filters: &'static [&'static str],
    pub description: &'static str,
}

/// All available presets.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "production",
        filters: &["available:>=:8", "enabled:>=:5"],
        description: "Production-ready models (available>=8, enabled>=5)",
    },
    Preset {
        name: "experimental",
        filters: &["available:<=:3", "enabled:>=:1"],
        description: "Experimental models (available<=3, enabled>=1)",
    },
    Preset {
        name: "disabled",
        filters: &["enabled:equals:0"],
        description: "Disabled models (enabled=0)",
    },
    Preset {
        name: "unavailable",
        filters: &["available:equals:0"],
        description: "Unavailable models (available=0)",
    },
    Preset {
        name: "vision",
        filters: &["vision:>=:1"],
        description: "Vision-capable models",
    },
    Preset {
        name: "llm",
        filters: &["model_category:equals:LLM"],
        description: "Language models only",
    },
    Preset {
        name: "embedding",
        filters: &["model_category:equals:embed"],
        description: "Embedding models only",
    },
    Preset {
        name: "anthropic",
        filters: &["parent:equals:Anthropic"],
        description: "Anthropic models",
    },
    Preset {
        name: "openai",
        filters: &["parent:equals:OpenAI"],
        description: "OpenAI models",
    },
    Preset {
        name: "google",
        filters: &["parent:equals:Google"],
        description: "Google models",
    },
    Preset {
        name: "latest",
        filters: &["model:contains:latest"],
        description: "Latest model versions",
    },
    Preset {
        name: "large-context",
        filters: &["context_window:>=:100000"],
        description: "Models with 100k+ context window",
    },
    Preset {
        name: "claude",
        filters: &["model:starts_with:claude"],
        description: "Claude family models",
    },
    Preset {
        name: "gpt",
        filters: &["model:contains:gpt"],
        description: "GPT family models",
    },
    Preset {
        name: "o1",
        filters: &["model:starts_with:o1"],
        description: "OpenAI O1 reasoning models",
    },
    Preset {
        name: "free",
        filters: &["token_costs:contains:$0.00"],
        description: "Free tier models",
    },
];

/// Looks up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Returns all preset names, for help text and error messages.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelist_query::{parse_expression, RegexGuard};

    #[test]
    fn find_known_preset() {
        let preset = find("production").unwrap();
        assert_eq!(preset.filters, ["available:>=:8", "enabled:>=:5"]);
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn every_preset_expression_parses() {
        let mut guard = RegexGuard::new();
        for preset in PRESETS {
            for expr in preset.filters {
                parse_expression(expr, false, &mut guard)
                    .unwrap_or_else(|e| panic!("preset '{}': {e}", preset.name));
            }
        }
    }

    #[test]
    fn names_are_unique() {
        let mut seen = names();
        seen.sort_unstable();
        let len = seen.len();
        seen.dedup();
        assert_eq!(seen.len(), len);
    }
}
