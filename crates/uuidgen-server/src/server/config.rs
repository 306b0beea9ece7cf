use anyhow::{Context, bail};
use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the `uuidgen-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first), with defaults suitable for local development.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "uuidgen-server",
    version,
    about = "An HTTP service that mints UUIDs and reports usage counters"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:12340" or "127.0.0.1:8080"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:12340"))]
    pub server_addr: String,

    /// Start in debug mode, emitting sequential identifiers instead of random
    /// UUIDs. Can be toggled later through `/v1/admin/settings`.
    ///
    /// Environment variable: `DEBUG`
    #[arg(long, env = "DEBUG", default_value_t = false)]
    pub debug: bool,

    /// Name reported as the origin of audit records and error responses.
    ///
    /// Environment variable: `SERVICE_NAME`
    #[arg(long, env = "SERVICE_NAME", default_value_t = String::from("pz-uuidgen"))]
    pub service_name: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub debug: bool,
    pub service_name: String,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args
            .server_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("SERVER_ADDR is not a valid socket address: {}", args.server_addr))?;

        let service_name = args.service_name.trim().to_string();
        if service_name.is_empty() {
            bail!("SERVICE_NAME must not be empty");
        }

        Ok(Self {
            server_addr,
            debug: args.debug,
            service_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let argv = std::iter::once("uuidgen-server").chain(extra.iter().copied());
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags_are_applied() {
        let config = ServerConfig::try_from(args(&[
            "--server-addr",
            "127.0.0.1:9000",
            "--debug",
            "--service-name",
            "uuidgen-test",
        ]))
        .unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:9000".parse().unwrap());
        assert!(config.debug);
        assert_eq!(config.service_name, "uuidgen-test");
    }

    #[test]
    fn bad_address_is_rejected() {
        let err = ServerConfig::try_from(args(&["--server-addr", "localhost"])).unwrap_err();
        assert!(err.to_string().contains("SERVER_ADDR"));
    }

    #[test]
    fn blank_service_name_is_rejected() {
        let err = ServerConfig::try_from(args(&["--service-name", "  "])).unwrap_err();
        assert!(err.to_string().contains("SERVICE_NAME"));
    }
}
