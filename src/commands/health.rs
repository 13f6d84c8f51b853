use crate::client::StudentsClient;
use crate::error::Result;
use crate::output;

pub async fn check(client: &StudentsClient) -> Result<()> {
    let body = client.health().await?;
    output::print_success(body.trim());
    Ok(())
}
