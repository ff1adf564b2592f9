//! Error type for controller construction and the operations that can fail.

/// Errors produced by the settings controller and its browser backend.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The document has no `<body>`; nothing can be tracked.
    #[error("document body is unavailable")]
    MissingBody,

    /// A theme mode string was neither `dark` nor `light`.
    #[error("unknown theme mode: {0}")]
    UnknownMode(String),

    /// A theme name was empty once the class suffix was removed.
    #[error("theme name is empty: {0:?}")]
    EmptyThemeName(String),

    /// The JSON configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[source] serde_json::Error),

    /// A browser global (window, document, selection) is missing.
    #[error("{0} is unavailable")]
    Unavailable(&'static str),

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),

    /// The browser refused the copy command.
    #[error("copy command was rejected by the browser")]
    CopyRejected,

    /// A snapshot could not be serialized for the JS caller.
    #[error("serialize failed: {0}")]
    Serialize(#[source] serde_json::Error),
}
