//! CLI application for controlling a Wiz light.
//!
//! The device address comes from `--host`/`--port` or, when `--host` is
//! omitted, from the `WIZ_HOST`, `WIZ_PORT` and `WIZ_TIMEOUT_MS` environment
//! variables. Set `RUST_LOG=debug` to see the raw datagrams.
//!
//! Run with: cargo run --example wiz_cli -- --help

use std::net::Ipv4Addr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use wiz_udp_client::{ClientConfig, Response, WizClient};

#[derive(Parser)]
#[command(name = "wiz-cli")]
#[command(about = "Control a Wiz smart light from the command line", long_about = None)]
struct Cli {
    /// Host name or IP address of the Wiz light
    #[arg(long, global = true)]
    host: Option<String>,

    /// UDP port of the light
    #[arg(short, long, global = true, default_value_t = ClientConfig::PORT)]
    port: u16,

    /// Reply timeout in milliseconds
    #[arg(short, long, global = true, default_value_t = ClientConfig::TIMEOUT_MS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the current light state
    Pilot,
    /// Get the system configuration
    SystemConfig,
    /// Get the user configuration
    UserConfig,
    /// Get the model configuration
    ModelConfig,
    /// Get device information
    DevInfo,
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
    /// Set brightness (10-100)
    Brightness { level: u8 },
    /// Set RGB color (0-255 for each component)
    Rgb { red: u8, green: u8, blue: u8 },
    /// Set the cold white LED level (0-255)
    ColdWhite { level: u8 },
    /// Set the warm white LED level (0-255)
    WarmWhite { level: u8 },
    /// Set color temperature in Kelvin (2000-9000)
    Temperature { kelvin: u16 },
    /// Set the scene animation speed (10-200)
    Speed { value: u8 },
    /// Set the dual-head up/down ratio (1-100)
    Ratio { value: u8 },
    /// Set a scene by ID
    Scene { id: u16 },
    /// List the scenes this light supports
    Scenes,
    /// Blink the light to locate it
    Pulse,
    /// Show the detected device class
    Capabilities,
    /// Register (or unregister) a host for heartbeat pushes
    Register {
        phone_ip: Ipv4Addr,
        phone_mac: String,
        #[arg(long)]
        unregister: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.host {
        Some(host) => ClientConfig::new(host).with_port(cli.port),
        None => ClientConfig::from_env()?,
    }
    .with_read_timeout(Duration::from_millis(cli.timeout));

    let client = WizClient::open(&config).await?;

    let response = match cli.command {
        Commands::Pilot => client.get_pilot().await?,
        Commands::SystemConfig => client.get_system_config().await?,
        Commands::UserConfig => client.get_user_config().await?,
        Commands::ModelConfig => client.get_model_config().await?,
        Commands::DevInfo => client.get_dev_info().await?,
        Commands::On => client.turn_on().await?,
        Commands::Off => client.turn_off().await?,
        Commands::Brightness { level } => client.set_brightness(level).await?,
        Commands::Rgb { red, green, blue } => client.set_rgb(red, green, blue).await?,
        Commands::ColdWhite { level } => client.set_cold_white(level).await?,
        Commands::WarmWhite { level } => client.set_warm_white(level).await?,
        Commands::Temperature { kelvin } => client.set_temperature(kelvin).await?,
        Commands::Speed { value } => client.set_speed(value).await?,
        Commands::Ratio { value } => client.set_ratio(value).await?,
        Commands::Scene { id } => client.set_scene(id).await?,
        Commands::Pulse => client.pulse().await?,
        Commands::Register {
            phone_ip,
            phone_mac,
            unregister,
        } => {
            client
                .registration(phone_ip, &phone_mac, !unregister)
                .await?
        }
        Commands::Scenes => {
            let caps = client.capabilities().await?;
            println!("Module: {}", caps.module_name);
            for scene in caps.available_scenes() {
                println!("  {:4}  {}", scene.id(), scene.name());
            }
            return Ok(());
        }
        Commands::Capabilities => {
            let caps = client.capabilities().await?;
            println!("Module:  {}", caps.module_name);
            println!("Classes: {:?}", caps.classes());
            return Ok(());
        }
    };

    print_response(&response)?;
    Ok(())
}

fn print_response(response: &Response) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
