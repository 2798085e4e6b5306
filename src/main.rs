use ethers::signers::Signer;

mod artifact;
mod bootstrap;
mod chain;
mod config;
mod deploy;
mod error;

// Deployment script: build the client stack, submit one deployment
// transaction, print the interface schema and the deployed address.
// Any failure propagates and aborts the process with a non-zero exit.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::Config::from_env()?;
    let ctx = bootstrap::RunContext::new(&config).await?;

    println!(
        "Attempting to deploy from account {:?}",
        ctx.client.signer().address()
    );

    let lottery =
        deploy::deploy_lottery(ctx.client.clone(), &ctx.artifact, ctx.deploy_gas_limit).await?;

    println!("{}", ctx.artifact.interface);
    println!("Contract deployed to {:?}", lottery.address());

    // Dropping the context releases the wallet connection.
    drop(ctx);
    Ok(())
}
