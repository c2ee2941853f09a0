use hashtables::{DemoConfig, DemoError};
use log::trace;

fn main() -> Result<(), DemoError> {
    env_logger::builder().init();

    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    trace!("config: {:#?}", config);

    let mut stdout = std::io::stdout().lock();
    hashtables::fill_and_drain(&config, &mut stdout)?;
    hashtables::grow(&mut stdout)?;

    Ok(())
}
