//! Process configuration for the two servers
//!
//! Both servers read their settings from the environment (after `.env` is
//! loaded by the binary). Nothing here fails: unset or unparsable variables
//! fall back to defaults.

use sb_shared::{
    CorsConfig, Environment, LoggingConfig, MailConfig, OtpConfig, PushConfig, ServerConfig,
};

/// Default listen port of the OTP server
pub const OTP_DEFAULT_PORT: u16 = 3000;

/// Default listen port of the notification relay
pub const NOTIFICATION_DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone)]
pub struct OtpServerConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub otp: OtpConfig,
    pub mail: MailConfig,
}

impl OtpServerConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            server: ServerConfig::from_env("OTP", OTP_DEFAULT_PORT),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[derive(Debug, Clone)]
pub struct NotificationServerConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub push: PushConfig,
}

impl NotificationServerConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            server: ServerConfig::from_env("NOTIFY", NOTIFICATION_DEFAULT_PORT),
            logging: LoggingConfig::for_environment(environment),
            push: PushConfig::from_env(),
        }
    }
}
