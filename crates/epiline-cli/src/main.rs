mod command;
mod input;
mod render;

fn main() -> anyhow::Result<()> {
    command::run()
}
