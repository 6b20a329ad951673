use clap::{Arg, Command};

use game_client::{Config, SendSyncError};

fn main() -> Result<(), SendSyncError> {
    env_logger::init();

    let matches = Command::new("game-client")
        .version("0.1")
        .about("Sends random player positions to a game server and prints the replies")
        .arg(
            Arg::new("connect")
                .short('c')
                .long("connect")
                .value_name("HOST:PORT")
                .help("Address of the game server"),
        )
        .get_matches();

    let mut config = Config::default();
    if let Some(addr) = matches.get_one::<String>("connect") {
        config.addr = addr.clone();
    }

    let stdout = std::io::stdout();
    game_client::run(&config, &mut rand::rng(), &mut stdout.lock())?;
    Ok(())
}
