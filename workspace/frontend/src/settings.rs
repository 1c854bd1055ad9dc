use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the hosted backend (auth + row storage + realtime)
    pub supabase_url: String,

    /// Publishable anon key sent with every backend request
    pub supabase_anon_key: String,

    /// Base URL of the public price API
    pub market_api_url: String,

    /// Market view poll interval in milliseconds
    pub market_poll_ms: u32,

    /// Default log level for the application
    pub log_level: Level,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            market_api_url: "https://api.coingecko.com/api/v3".to_string(),
            market_poll_ms: 60_000,
            log_level: Level::Info,
            toast_duration_ms: 5000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window environment, with localStorage
    /// overrides for local development against a different backend.
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(url)) = storage.get_item("cryptokit_supabase_url") {
                    settings.supabase_url = url;
                }

                if let Ok(Some(key)) = storage.get_item("cryptokit_supabase_anon_key") {
                    settings.supabase_anon_key = key;
                }

                if let Ok(Some(url)) = storage.get_item("cryptokit_market_api_url") {
                    settings.market_api_url = url;
                }

                if let Ok(Some(poll)) = storage.get_item("cryptokit_market_poll_ms") {
                    if let Ok(poll_ms) = poll.parse::<u32>() {
                        settings.market_poll_ms = poll_ms;
                    }
                }

                if let Ok(Some(level)) = storage.get_item("cryptokit_log_level") {
                    settings.log_level = match level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }

                if let Ok(Some(duration)) = storage.get_item("cryptokit_toast_duration_ms") {
                    if let Ok(duration_ms) = duration.parse::<u32>() {
                        settings.toast_duration_ms = duration_ms;
                    }
                }
            }
        }

        settings
    }

    /// Row-storage endpoint URL for a table path with filters.
    pub fn rest_url(&self, path_and_query: &str) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, path_and_query)
    }

    /// Authentication endpoint URL.
    pub fn auth_url(&self, path_and_query: &str) -> String {
        format!("{}/auth/v1{}", self.supabase_url, path_and_query)
    }

    /// Websocket URL of the change-notification feed.
    pub fn realtime_url(&self) -> String {
        let ws_base = if let Some(rest) = self.supabase_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.supabase_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.supabase_url.clone()
        };
        format!(
            "{ws_base}/realtime/v1/websocket?apikey={}&vsn=1.0.0",
            self.supabase_anon_key
        )
    }

    /// Full price API URL for an endpoint.
    pub fn market_url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.market_api_url, path_and_query)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_and_auth_urls_are_rooted_at_the_backend() {
        let settings = AppSettings {
            supabase_url: "https://proj.supabase.co".to_string(),
            ..AppSettings::default()
        };

        assert_eq!(
            settings.rest_url("profiles?username=eq.alice&select=*"),
            "https://proj.supabase.co/rest/v1/profiles?username=eq.alice&select=*"
        );
        assert_eq!(
            settings.auth_url("/token?grant_type=password"),
            "https://proj.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn realtime_url_switches_to_websocket_scheme() {
        let settings = AppSettings {
            supabase_url: "https://proj.supabase.co".to_string(),
            supabase_anon_key: "anon".to_string(),
            ..AppSettings::default()
        };

        assert_eq!(
            settings.realtime_url(),
            "wss://proj.supabase.co/realtime/v1/websocket?apikey=anon&vsn=1.0.0"
        );

        let local = AppSettings::default();
        assert!(local.realtime_url().starts_with("ws://localhost:54321/"));
    }

    #[test]
    fn market_url_appends_endpoint() {
        let settings = AppSettings::default();
        assert_eq!(
            settings.market_url("/coins/markets?vs_currency=usd"),
            "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd"
        );
    }
}
