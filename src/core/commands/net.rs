use super::{required, Command, CommandError, Outcome};
use crate::core::session::Session;
use crate::net::HttpClient;

pub const IP_ECHO_URL: &str = "https://api.ipify.org";

#[derive(Debug, Clone)]
pub struct CurlCommand {
    client: HttpClient,
}

impl CurlCommand {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl Command for CurlCommand {
    fn execute(&self, args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        let url = required(args, "curl", "URL")?;
        Ok(Outcome::Print(self.client.get_text(url)?))
    }
}

/// Asks an external echo service for the public address.
#[derive(Debug, Clone)]
pub struct IpCommand {
    client: HttpClient,
    endpoint: String,
}

impl IpCommand {
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoint(client, IP_ECHO_URL)
    }

    pub fn with_endpoint(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl Command for IpCommand {
    fn execute(&self, _args: &[String], _session: &mut Session) -> Result<Outcome, CommandError> {
        let body = self.client.get_text(&self.endpoint)?;
        Ok(Outcome::Print(format!("Your IP: {}", body.trim())))
    }
}
