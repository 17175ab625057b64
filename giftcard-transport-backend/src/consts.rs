pub mod endpoint {
    // Country / currency metadata for the selector screens
    pub const COUNTRY_LIST: &str = "gc/public/countrylist";
}

/// Client variant reported to the backend with every request.
pub const APP_ID: &str = "ios-v1";

/// Shared signing key. Known to the backend, never transmitted.
pub const APP_KEY: &str = "f55b967cad863f21a385e904dceae165";

cfg_if::cfg_if! {
    // 默认使用开发环境 (dev)
    if #[cfg(any(feature = "dev", not(any(feature = "test", feature = "prod"))))] {
        pub const BASE_URL: &str = "https://dev-giftcard8-api.gcard8.com";
    // 测试环境
    } else if #[cfg(feature = "test")] {
        pub const BASE_URL: &str = "https://test-giftcard8-api.gcard8.com";

    // 生产环境
    } else if #[cfg(feature = "prod")] {
        pub const BASE_URL: &str = "https://api.gcard8.com";
    } else {
        compile_error!("No valid feature selected! Use 'dev', 'test', or 'prod'.");
    }
}
