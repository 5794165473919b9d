use letterhead_margin::{add_margin, MarginConfig, MarginError};

fn main() -> Result<(), MarginError> {
    env_logger::init(); // Initialize logger

    let config = MarginConfig::load(&MarginConfig::default_path())?;
    let summary = add_margin(&config)?;

    for line in summary.lines() {
        println!("{}", line);
    }

    Ok(())
}
