use std::str::FromStr;

use derive_more::From;
use strum::{AsRefStr, Display, EnumString};

use crate::{element::MenuElement, error::ConfigurationError, CHECKABLE_ATTRIBUTE};

/// How choosing an item changes its checked state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Display, AsRefStr, EnumString)]
pub enum Checkable {
    #[default]
    #[strum(to_string = "none")]
    None,
    /// At most one item is checked.
    #[strum(to_string = "single-select", serialize = "one")]
    Single,
    /// Each item toggles independently.
    #[strum(to_string = "multi-select", serialize = "many")]
    Multiple,
}

impl Checkable {
    pub fn role(self) -> Role {
        match self {
            Self::None => Role::MenuItem,
            Self::Single => Role::MenuItemRadio,
            Self::Multiple => Role::MenuItemCheckbox,
        }
    }

    pub fn is_checkable(self) -> bool {
        self != Self::None
    }
}

/// The ARIA `role` given to each menu item.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    MenuItem,
    MenuItemRadio,
    MenuItemCheckbox,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, From)]
pub struct Config {
    pub checkable: Checkable,
}

impl Config {
    pub fn checkable(mut self, checkable: Checkable) -> Self {
        self.checkable = checkable;
        self
    }

    /// Read the configuration declared on a trigger's data attributes.
    pub fn from_element(elem: &impl MenuElement) -> Result<Self, ConfigurationError> {
        let checkable = match elem.attribute(CHECKABLE_ATTRIBUTE) {
            Some(value) => Checkable::from_str(value.trim())
                .map_err(|_| ConfigurationError::InvalidCheckable(value))?,
            None => Checkable::default(),
        };

        Ok(Self { checkable })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Checkable, Config, Role};
    use crate::{dry::DryDocument, error::ConfigurationError, CHECKABLE_ATTRIBUTE};

    #[test]
    fn checkable_names() {
        assert_eq!(Checkable::from_str("none"), Ok(Checkable::None));
        assert_eq!(Checkable::from_str("one"), Ok(Checkable::Single));
        assert_eq!(Checkable::from_str("single-select"), Ok(Checkable::Single));
        assert_eq!(Checkable::from_str("many"), Ok(Checkable::Multiple));
        assert_eq!(Checkable::from_str("multi-select"), Ok(Checkable::Multiple));
        assert!(Checkable::from_str("all").is_err());
        assert_eq!(Checkable::Single.to_string(), "single-select");
    }

    #[test]
    fn roles() {
        assert_eq!(Checkable::None.role().as_ref(), "menuitem");
        assert_eq!(Checkable::Single.role().as_ref(), "menuitemradio");
        assert_eq!(Checkable::Multiple.role().as_ref(), "menuitemcheckbox");
        assert_eq!(Role::MenuItem.to_string(), "menuitem");
    }

    #[test]
    fn from_attributes() {
        let doc = DryDocument::new();
        let trigger = doc.element("button");
        assert_eq!(Config::from_element(&trigger), Ok(Config::default()));

        trigger.set(CHECKABLE_ATTRIBUTE, "many");
        assert_eq!(
            Config::from_element(&trigger),
            Ok(Config::from(Checkable::Multiple))
        );

        trigger.set(CHECKABLE_ATTRIBUTE, "some");
        assert_eq!(
            Config::from_element(&trigger),
            Err(ConfigurationError::InvalidCheckable("some".to_string()))
        );
    }
}
