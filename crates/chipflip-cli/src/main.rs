mod command;
mod record;
mod transport;
mod ui;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
