//! Interactive area selection.

use deskhands_protocols::Rect;

/// Parse `slop -f "%x %y %w %h"` output.
pub(crate) fn parse_slop(output: &str) -> Option<Rect> {
    let numbers: Vec<i32> = output
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match numbers[..] {
        [x, y, width, height] if width > 0 && height > 0 => Some(Rect::new(x, y, width, height)),
        _ => None,
    }
}

/// Ask the user to drag out a rectangle. `Ok(None)` when they cancel.
#[cfg(target_os = "linux")]
pub(crate) fn select_rect() -> Result<Option<Rect>, String> {
    use std::process::Command;

    let output = Command::new("slop")
        .args(["-f", "%x %y %w %h"])
        .output()
        .map_err(|e| format!("slop: {}", e))?;

    // slop exits non-zero when the selection is cancelled.
    if !output.status.success() {
        return Ok(None);
    }
    Ok(parse_slop(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(not(target_os = "linux"))]
pub(crate) fn select_rect() -> Result<Option<Rect>, String> {
    tracing::warn!("Interactive selection is only available on Linux");
    Ok(None)
}
