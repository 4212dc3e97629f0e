//! Unit cell drawing command: draw_cell

use lin_alg::f64::Vec3;

use cellaxes_algos::{
    compose_axis_bundle, orthogonalization_matrix, LatticeParameters, PlacementTransform,
};
use cellaxes_scene::{build_arrow, ArrowColor, ArrowStyle, Label};

use crate::args::{ArgValue, ParsedCommand};
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::error::{CmdError, CmdResult};

pub fn register(registry: &mut CommandRegistry) {
    registry.register(DrawCellCommand);
}

// ============================================================================
// draw_cell command
// ============================================================================

struct DrawCellCommand;

impl Command for DrawCellCommand {
    fn name(&self) -> &str {
        "draw_cell"
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "draw_cell" draws the three unit cell edge axes of an object as
    arrow glyphs, positioned and oriented to track the object's
    placement. Each axis gets its own graphics object named
    <object>_a, <object>_b, <object>_c plus a text label at its tip.

USAGE

    draw_cell object [, length [, origin= [, aspect= [, head= [, color=]]]]]

ARGUMENTS

    object = string: object with crystallographic symmetry
    length = float: display length of each axis (default: 10.0)
    origin = [x, y, z]: world-space override for the bundle origin
    aspect = float: shaft radius as a fraction of length (default: 0.03)
    head = float: head length as a fraction of length (default: 0.1)
    color = string: single color for all three axes
            (default: axis_a / axis_b / axis_c palette)

EXAMPLES

    draw_cell 1oky
    draw_cell 1oky, 15
    draw_cell 1oky, origin=[5, 5, 5], color=yellow
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &ParsedCommand) -> CmdResult {
        let object = args
            .get_str(0)
            .or_else(|| args.get_named_str("object"))
            .ok_or_else(|| CmdError::MissingArgument("object".to_string()))?
            .to_string();

        let mut style = ArrowStyle::default();
        if let Some(length) = args.get_float(1).or_else(|| args.get_named_float("length")) {
            style.display_length = length;
        }
        if let Some(aspect) = args.get_named_float("aspect") {
            style.aspect_ratio = aspect;
        }
        if let Some(head) = args.get_named_float("head") {
            style.head_fraction = head;
        }

        let origin_override = match args.get_named("origin") {
            Some(value) => Some(parse_origin(value)?),
            None => None,
        };

        let symmetry = ctx
            .host
            .symmetry(&object)
            .ok_or_else(|| CmdError::NoSymmetry(object.clone()))?;
        let object_matrix = ctx
            .host
            .object_matrix(&object)
            .ok_or_else(|| CmdError::ObjectNotFound(object.clone()))?;

        let params = LatticeParameters::new(symmetry.cell_lengths, symmetry.cell_angles);
        let basis = orthogonalization_matrix(&params)?;
        let placement = PlacementTransform::from_object_matrix(&object_matrix);

        let bundle =
            compose_axis_bundle(&basis, &placement, style.display_length, origin_override)?;

        // Build everything before emitting anything: a failure on any axis
        // must leave the scene untouched.
        let mut drawn = Vec::with_capacity(3);
        for (axis, tip) in bundle.tips() {
            let color = match args.get_named_str("color") {
                Some(name) => ctx.colors.resolve(name)?,
                None => ctx.colors.resolve(&format!("axis_{}", axis))?,
            };
            let arrow = build_arrow(bundle.origin, tip, &style, ArrowColor::Single(color))?;
            let label = Label::new(&axis.to_string(), tip).with_color(color);
            drawn.push((format!("{}_{}", object, axis), arrow.to_stream(), label));
        }

        for (name, stream, label) in drawn {
            ctx.host.draw_primitives(&name, &stream);
            ctx.host.place_label(label);
        }

        ctx.print(&format!(
            " DrawCell: drew unit cell axes for \"{}\" (space group '{}').",
            object, symmetry.space_group
        ));

        Ok(())
    }
}

/// Validate an origin override argument
///
/// Accepts a bracketed list with exactly three numeric components, or a
/// string that reduces to one. Anything else is rejected rather than
/// guessed at.
fn parse_origin(value: &ArgValue) -> Result<Vec3, CmdError> {
    let components = match value {
        ArgValue::List(_) => value.as_float_list(),
        ArgValue::String(s) => s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<f64>().ok())
            .collect(),
        _ => None,
    };

    match components.as_deref() {
        Some([x, y, z]) => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(CmdError::invalid_arg(
            "origin",
            format!("expected exactly three numeric components, got '{}'", value),
        )),
    }
}
