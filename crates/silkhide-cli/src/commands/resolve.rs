use silkhide_document::Footprint;

use crate::cli::ResolveArgs;
use crate::commands::open_board;
use crate::context::{CliContext, CliResult};
use crate::output::{FootprintRow, ResolutionView, render_resolution};

pub(crate) fn handle_resolve(ctx: &CliContext, args: &ResolveArgs) -> CliResult<()> {
    let view = resolve_board(ctx, args)?;
    render_resolution(&view, ctx.output)
}

pub(crate) fn resolve_board(ctx: &CliContext, args: &ResolveArgs) -> CliResult<ResolutionView> {
    let host = open_board(&args.board)?;
    let resolution = ctx.app.config.config.resolver.resolver().resolve_host(&host);
    let footprints = resolution
        .targets()
        .into_iter()
        .flatten()
        .map(|id| FootprintRow {
            id: id.get(),
            designator: host
                .footprint(*id)
                .map_or_else(|| id.to_string(), Footprint::designator),
        })
        .collect();
    Ok(ResolutionView {
        path: resolution.path(),
        footprints,
    })
}
