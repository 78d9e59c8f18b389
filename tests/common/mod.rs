#![allow(dead_code)]

use httpmock::MockServer;
use postmark_client::Client;

pub const SERVER_TOKEN: &str = "server-token";
pub const ACCOUNT_TOKEN: &str = "account-token";

pub const SERVER_HEADER: &str = "x-postmark-server-token";
pub const ACCOUNT_HEADER: &str = "x-postmark-account-token";

/// Client pointed at the mock server with both tokens set.
pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .server_token(SERVER_TOKEN)
        .account_token(ACCOUNT_TOKEN)
        .base_url(server.base_url())
        .build()
        .unwrap()
}
