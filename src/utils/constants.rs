/// localStorage key holding the bearer token
pub const CREDENTIAL_KEY: &str = "accessToken";

/// localStorage key holding the selected theme
pub const THEME_KEY: &str = "theme";

/// Element the app mounts into
pub const ROOT_ELEMENT_ID: &str = "app";

/// Media query used to resolve `Theme::System`
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
