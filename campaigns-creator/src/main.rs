use campaigns_creator::{CreatorError, Dependencies};
use dotenv::dotenv;

/// Main entry point for the campaign creation demo.
///
/// Initializes dotenv, wires the application dependencies, assembles the
/// demo campaign payload, and prints the prepared creation calldata for
/// offline signing.
///
/// # Returns
///
/// A `Result` indicating success or a `CreatorError` if an error occurs
/// during wiring or payload preparation.
#[tokio::main]
async fn main() -> Result<(), CreatorError> {
    dotenv().ok();

    let dependencies = Dependencies::new()?;
    println!(
        "{} - Preparing campaign payload on chain {}",
        chrono::Utc::now().to_rfc3339(),
        dependencies.chain_id
    );

    let (payload, reward_total) = dependencies.demo_payload()?;
    println!(
        "{} - Funding budget {} for owner {}",
        chrono::Utc::now().to_rfc3339(),
        payload.budget.address(),
        payload.owner
    );

    let calldata =
        dependencies
            .submitter
            .prepare(&payload, dependencies.reward_token, reward_total)?;
    println!("Prepared campaign payload: {calldata}");
    Ok(())
}
