//! Standalone arrow command: cgo_arrow

use lin_alg::f64::Vec3;

use cellaxes_scene::{build_arrow, ArrowColor, ArrowStyle};

use crate::args::{ArgValue, ParsedCommand};
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::error::{CmdError, CmdResult};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(CgoArrowCommand);
}

// ============================================================================
// cgo_arrow command
// ============================================================================

struct CgoArrowCommand;

impl Command for CgoArrowCommand {
    fn name(&self) -> &str {
        "cgo_arrow"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "cgo_arrow" draws a single arrow glyph between two world-space
    points.

USAGE

    cgo_arrow start, end [, radius= [, head= [, color= [, name=]]]]

ARGUMENTS

    start = [x, y, z]: arrow origin
    end = [x, y, z]: arrow tip
    radius = float: absolute shaft radius (default: proportional, 3% of length)
    head = float: head length as a fraction of arrow length (default: 0.1)
    color = string: one or two color names; with two, the shaft fades
            from the first to the second and the head takes the second
    name = string: graphics object name (default: "arrow")

EXAMPLES

    cgo_arrow [0,0,0], [10,0,0]
    cgo_arrow [0,0,0], [10,0,0], radius=0.5, color=blue red
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &ParsedCommand) -> CmdResult {
        let origin = coord_arg(args, 0, "start")?;
        let tip = coord_arg(args, 1, "end")?;

        let mut style = ArrowStyle::default();
        let length = (tip - origin).magnitude();
        if let Some(radius) = args.get_named_float("radius") {
            // The emitter works with proportional radii; fold the absolute
            // radius in against the actual arrow length.
            if length > 0.0 {
                style.aspect_ratio = radius / length;
            }
        }
        if let Some(head) = args.get_named_float("head") {
            style.head_fraction = head;
        }

        let color = parse_arrow_color(ctx, args.get_named_str("color"))?;
        let name = args.get_named_str("name").unwrap_or("arrow").to_string();

        let arrow = build_arrow(origin, tip, &style, color)?;
        ctx.host.draw_primitives(&name, &arrow.to_stream());

        ctx.print(&format!(" CgoArrow: drew \"{}\".", name));
        Ok(())
    }
}

/// Fetch a positional coordinate argument as a Vec3
fn coord_arg(args: &ParsedCommand, index: usize, name: &str) -> Result<Vec3, CmdError> {
    let value = args
        .get_arg(index)
        .or_else(|| args.get_named(name))
        .ok_or_else(|| CmdError::MissingArgument(name.to_string()))?;

    match value.as_float_list().as_deref() {
        Some([x, y, z]) => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(CmdError::invalid_arg(
            name,
            format!("expected a coordinate triple, got '{}'", value),
        )),
    }
}

/// Resolve a one- or two-name color argument
///
/// Two whitespace-separated names select the legacy paired-endpoint mode.
fn parse_arrow_color(
    ctx: &CommandContext<'_>,
    spec: Option<&str>,
) -> Result<ArrowColor, CmdError> {
    let spec = spec.unwrap_or("axis_a");
    let names: Vec<&str> = spec.split_whitespace().collect();
    match names.as_slice() {
        [single] => Ok(ArrowColor::Single(ctx.colors.resolve(single)?)),
        [first, second] => Ok(ArrowColor::Paired(
            ctx.colors.resolve(first)?,
            ctx.colors.resolve(second)?,
        )),
        _ => Err(CmdError::invalid_arg(
            "color",
            format!("expected one or two color names, got '{}'", spec),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_arg() {
        let cmd = ParsedCommand::new("cgo_arrow")
            .with_arg(ArgValue::List(vec![
                ArgValue::Int(0),
                ArgValue::Int(0),
                ArgValue::Int(0),
            ]))
            .with_arg(ArgValue::List(vec![
                ArgValue::Float(1.0),
                ArgValue::Int(2),
                ArgValue::Int(3),
            ]));
        assert_eq!(coord_arg(&cmd, 0, "start").unwrap(), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(coord_arg(&cmd, 1, "end").unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert!(coord_arg(&cmd, 2, "missing").is_err());
    }

    #[test]
    fn test_coord_arg_rejects_bad_arity() {
        let cmd = ParsedCommand::new("cgo_arrow").with_arg(ArgValue::List(vec![
            ArgValue::Int(0),
            ArgValue::Int(0),
        ]));
        assert!(matches!(
            coord_arg(&cmd, 0, "start"),
            Err(CmdError::InvalidArgument { .. })
        ));
    }
}
