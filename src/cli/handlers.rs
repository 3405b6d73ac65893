//! Command handlers routing CLI commands to the client library

use anyhow::Result;

use pushwoosh_client::{system_proxy, AsyncPushwooshClient, Message, Session};

use super::Commands;

/// Executes parsed CLI commands
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Send {
                auth,
                application,
                message,
                devices,
                proxy,
                system_proxy: use_system_proxy,
            } => {
                self.handle_send(auth, application, message, devices, proxy, use_system_proxy)
                    .await
            }
        }
    }

    async fn handle_send(
        &self,
        auth: String,
        application: String,
        message: String,
        devices: Vec<String>,
        proxy: Option<String>,
        use_system_proxy: bool,
    ) -> Result<()> {
        let session = match proxy {
            Some(proxy) => Session::with_proxy(auth, application, proxy)?,
            None if use_system_proxy => Session::with_proxy_from(auth, application, system_proxy)?,
            None => Session::new(auth, application)?,
        };

        let client = AsyncPushwooshClient::new(session)?;
        let response = client.send(&Message::new(message, devices)).await?;

        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
