use anyhow::Context;
use timetable::core::cli::CliPaths;
use timetable::core::context::AppContext;
use timetable::logging::LogTarget;
use timetable::prompter::flows::main_flow::MainFlow;
use timetable::prompter::prompter::Prompter;

fn main() -> anyhow::Result<()> {
    let paths = CliPaths::from_env().map_err(anyhow::Error::msg)?;
    let data_path = paths.data_path.clone();
    let mut ctx = AppContext::new_with_paths(paths)
        .with_context(|| format!("failed to open timetable at {}", data_path.display()))?;

    let prompter = Prompter::new();
    let flow = MainFlow::new(&mut ctx);
    if let Err(err) = prompter.run(flow) {
        ctx.logger.error(format!("{err}"), LogTarget::FileOnly);
        return Err(err.into());
    }
    Ok(())
}
