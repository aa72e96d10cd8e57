use anyhow::{Context, Result};
use clap::Parser;
use nfdlookup::registry::constants::{NFD_SUFFIX, OWNER_KEY};
use nfdlookup::{is_valid_address, ClientConfig, Network, NfdClient, PropertyValue};

#[derive(Debug, Parser)]
#[command(author, version, about = "NFD forward and reverse lookup", long_about = None)]
struct Args {
    /// NFD names (the .algo suffix is optional) or Algorand addresses
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Registry network; defaults to NFD_NETWORK or mainnet
    #[arg(long)]
    network: Option<Network>,

    /// algod endpoint; defaults to ALGOD_URL or the public algonode node
    #[arg(long)]
    algod_url: Option<String>,

    /// algod API token; defaults to ALGOD_TOKEN
    #[arg(long)]
    algod_token: Option<String>,

    /// For addresses, list the NFDs the account holds and owns instead of
    /// every NFD linking it
    #[arg(long)]
    owned: bool,
}

fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("read configuration from environment")?;
    if let Some(network) = args.network {
        let custom_url = config.algod_url != config.network.default_algod_url();
        config.network = network;
        if !custom_url {
            config.algod_url = network.default_algod_url().to_string();
        }
    }
    if let Some(url) = &args.algod_url {
        config.algod_url = url.clone();
    }
    if let Some(token) = &args.algod_token {
        config.algod_token = Some(token.clone());
    }
    Ok(config)
}

fn print_addresses(client: &NfdClient, name: &str) -> Result<()> {
    let Some(nfd) = client
        .lookup_name(name)
        .with_context(|| format!("look up {}", name))?
    else {
        println!("{}: not found", name);
        return Ok(());
    };

    for (key, value) in &nfd.properties {
        match value {
            PropertyValue::Address(address) if key == OWNER_KEY => println!("{}: {}", key, address),
            PropertyValue::Addresses(addresses) => {
                for (n, address) in addresses.iter().enumerate() {
                    println!("{}[{}]: {}", key, n, address);
                }
            }
            PropertyValue::Address(_) => {}
        }
    }
    println!("vault: {}", nfd.vault);
    Ok(())
}

fn print_names(client: &NfdClient, address: &str, owned: bool) -> Result<()> {
    let names = if owned {
        client.lookup_opted_and_owned_by(address)
    } else {
        client.lookup_address(address)
    }
    .with_context(|| format!("look up {}", address))?;

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let client = NfdClient::from_config(&config).context("create algod client")?;

    for arg in &args.inputs {
        let arg = arg.trim();
        if is_valid_address(arg) {
            print_names(&client, arg, args.owned)?;
        } else if arg.ends_with(NFD_SUFFIX) {
            print_addresses(&client, arg)?;
        } else {
            print_addresses(&client, &format!("{}{}", arg, NFD_SUFFIX))?;
        }
    }
    Ok(())
}
