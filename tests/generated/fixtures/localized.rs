// This file is @generated by locgen. DO NOT EDIT.

/// Localized phrases. Default language: `en`.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Localized {
    House,
    Hello { name: String },
    Houses { count: String },
}

#[allow(non_snake_case, unused_variables)]
impl Localized {
    /// Translation for the system language.
    pub fn string(&self) -> String {
        self.string_for(Self::system_language())
    }

    /// Translation for `locale`: the first language that is a prefix of it, else `en`.
    pub fn string_for(&self, locale: &str) -> String {
        if locale.starts_with("de") {
            self.de()
        } else if locale.starts_with("fr") {
            self.fr()
        } else {
            self.en()
        }
    }

    /// `en` translation.
    pub fn en(&self) -> String {
        match self {
            Self::House => String::from("House"),
            Self::Hello { name } => format!("Hello, {name}!"),
            Self::Houses { count } => {
                if count == "1" {
                    String::from("One house")
                } else {
                    format!("{count} houses")
                }
            }
        }
    }

    /// `de` translation.
    pub fn de(&self) -> String {
        match self {
            Self::House => String::from("Haus"),
            Self::Hello { name } => format!("Hallo, {name}!"),
            Self::Houses { count } => {
                if count == "1" {
                    String::from("Ein Haus")
                } else {
                    format!("{count} Häuser")
                }
            }
        }
    }

    /// `fr` translation.
    pub fn fr(&self) -> String {
        match self {
            Self::House => String::from("House"),
            Self::Hello { name } => format!("Hello, {name}!"),
            Self::Houses { count } => format!("{count} maisons"),
        }
    }

    fn system_language() -> &'static str {
        static LANGUAGE: std::sync::OnceLock<String> = std::sync::OnceLock::new();
        LANGUAGE.get_or_init(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .into_iter()
                .filter_map(|name| std::env::var(name).ok())
                .find(|value| !value.is_empty())
                .unwrap_or_default()
        })
    }
}

/// Shortcuts for `Localized` in the system language.
#[allow(non_snake_case)]
pub mod loc {
    pub fn house() -> String {
        super::Localized::House.string()
    }

    pub fn hello(name: &str) -> String {
        super::Localized::Hello { name: name.to_owned() }.string()
    }

    pub fn houses(count: &str) -> String {
        super::Localized::Houses { count: count.to_owned() }.string()
    }
}
