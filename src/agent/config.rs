/// Startup configuration, assembled from CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tls: TlsConfig,
    pub rate_limit: RateLimitSpec,
}

#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    pub enabled: bool,
    pub cert_file: String,
    pub key_file: String,
}

impl TlsConfig {
    /// `sslmode` enables TLS only on (case-insensitive) "enable".
    pub fn from_flags(ssl_mode: &str, cert_file: &str, key_file: &str) -> Self {
        Self {
            enabled: ssl_mode.trim().eq_ignore_ascii_case("enable"),
            cert_file: cert_file.to_string(),
            key_file: key_file.to_string(),
        }
    }
}

/// Rate limit as `"<requests-per-second>,<burst>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSpec {
    pub requests_per_sec: u32,
    pub burst: u32,
}

impl Default for RateLimitSpec {
    fn default() -> Self {
        Self {
            requests_per_sec: 10,
            burst: 10,
        }
    }
}

impl RateLimitSpec {
    /// Parse the flag value. Either half falls back to 10 independently
    /// when missing or malformed.
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',');
        let requests_per_sec = parts
            .next()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(10);
        let burst = parts
            .next()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(10);
        Self {
            requests_per_sec,
            burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_spec() {
        let spec = RateLimitSpec::parse("25,50");
        assert_eq!(spec.requests_per_sec, 25);
        assert_eq!(spec.burst, 50);
    }

    #[test]
    fn each_half_falls_back_independently() {
        assert_eq!(RateLimitSpec::parse("abc,5"), RateLimitSpec { requests_per_sec: 10, burst: 5 });
        assert_eq!(RateLimitSpec::parse("5,abc"), RateLimitSpec { requests_per_sec: 5, burst: 10 });
        assert_eq!(RateLimitSpec::parse("garbage"), RateLimitSpec::default());
        assert_eq!(RateLimitSpec::parse(""), RateLimitSpec::default());
    }

    #[test]
    fn tls_only_enables_on_the_magic_word() {
        assert!(TlsConfig::from_flags("enable", "c.pem", "k.pem").enabled);
        assert!(TlsConfig::from_flags("  Enable ", "c.pem", "k.pem").enabled);
        assert!(!TlsConfig::from_flags("disable", "", "").enabled);
        assert!(!TlsConfig::from_flags("yes", "", "").enabled);
    }
}
