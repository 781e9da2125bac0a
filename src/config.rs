/// Configuration constants for the ELIS API
pub mod api {
    /// Version suffix appended to the base URL
    pub const VERSION_SUFFIX: &str = "/v1";

    /// Login endpoint (username + password -> token)
    pub const LOGIN: &str = "auth/login";

    /// Logout endpoint (invalidates the session token)
    pub const LOGOUT: &str = "auth/logout";

    /// Profile of the authenticated user
    pub const CURRENT_USER: &str = "auth/user";

    /// Annotations endpoint (used to collect documents before deletion)
    pub const ANNOTATIONS: &str = "annotations";

    /// Default key holding items in a paginated envelope
    pub const RESULTS_KEY: &str = "results";

    /// Page size used when collecting documents of a queue
    pub const DOCUMENTS_PAGE_SIZE: u32 = 50;

    /// Extraction endpoint the API currently requires on queue creation
    pub const DEFAULT_RIR_URL: &str = "https://all.rir.rossum.ai";

    /// Domain of generated inbox addresses
    pub const INBOX_EMAIL_DOMAIN: &str = "elis.rossum.ai";

    /// Length of the random inbox email suffix
    pub const INBOX_SUFFIX_LEN: usize = 6;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Prefix of credential environment variables (ELIS_URL, ELIS_USERNAME, ...)
    pub const ENV_PREFIX: &str = "ELIS_";

    /// Environment variable selecting the profile
    pub const PROFILE_ENV_VAR: &str = "ELIS_PROFILE";

    /// Profile used when none is selected
    pub const DEFAULT_PROFILE: &str = "default";

    /// Directory name for elisctl configuration (relative to HOME)
    pub const DIR_NAME: &str = ".elisctl";

    /// Credentials file name
    pub const FILE_NAME: &str = "credentials.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default ELIS API URL offered by `configure`
    pub const API_URL: &str = "https://api.elis.rossum.ai";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default JSON indentation for schema download
    pub const INDENT: usize = 2;
}
