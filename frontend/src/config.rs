pub struct Config {
    pub api_base_url: &'static str,
    pub notice_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            notice_ms: 2500,
        }
    }
}

pub const CONFIG: Config = Config::new();
