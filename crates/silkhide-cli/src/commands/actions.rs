use crate::context::{CliContext, CliResult};
use crate::output::render_actions;

pub(crate) fn handle_actions(ctx: &CliContext) -> CliResult<()> {
    let descriptors: Vec<_> = ctx.app.registry.descriptors().cloned().collect();
    render_actions(&descriptors, ctx.output)
}
