use thiserror::Error;

/// Why a menu button couldn't be constructed.
///
/// Construction checks everything before touching the page, so none of these
/// leave the trigger or menu partly configured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("menu button has no `data-inclusive-menu-opens` attribute")]
    MissingMenuReference,
    #[error("#{0} menu missing")]
    MenuMissing(String),
    #[error("the #{0} menu has no menu items")]
    NoMenuItems(String),
    #[error("unknown checkable mode `{0}`")]
    InvalidCheckable(String),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("element is not an item of this menu")]
pub struct InvalidArgumentError;
