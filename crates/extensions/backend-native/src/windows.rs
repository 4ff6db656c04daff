//! Top-level window enumeration.

use deskhands_protocols::Rect;

/// A window as reported by the platform, before monitor assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: u64,
    pub title: String,
    pub app_name: String,
    pub rect: Rect,
}

/// Parse `wmctrl -l -p -G -x` output.
///
/// Columns: id, desktop, pid, x, y, width, height, WM_CLASS, host, title.
/// The application name is the class part of `instance.Class`.
pub fn parse_wmctrl_windows(output: &str) -> Vec<WindowRecord> {
    let mut windows = Vec::new();

    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 9 {
            continue;
        }

        let Ok(id) = u64::from_str_radix(parts[0].trim_start_matches("0x"), 16) else {
            continue;
        };
        let x = parts[3].parse().unwrap_or(0);
        let y = parts[4].parse().unwrap_or(0);
        let width = parts[5].parse().unwrap_or(0);
        let height = parts[6].parse().unwrap_or(0);
        let class = parts[7];
        let app_name = class.rsplit_once('.').map_or(class, |(_, c)| c);

        windows.push(WindowRecord {
            id,
            title: parts[9..].join(" "),
            app_name: app_name.to_string(),
            rect: Rect::new(x, y, width, height),
        });
    }

    windows
}

/// Parse the tab-separated list produced by [`APPLESCRIPT_WINDOWS`]:
/// app, title, x, y, width, height. Ids are assigned in listing order.
pub fn parse_applescript_windows(output: &str) -> Vec<WindowRecord> {
    let mut windows = Vec::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 6 {
            continue;
        }
        let numbers: Vec<i32> = fields[2..6]
            .iter()
            .filter_map(|f| f.trim().parse().ok())
            .collect();
        let &[x, y, width, height] = &numbers[..] else {
            continue;
        };

        windows.push(WindowRecord {
            id: windows.len() as u64 + 1,
            title: fields[1].to_string(),
            app_name: fields[0].trim().to_string(),
            rect: Rect::new(x, y, width, height),
        });
    }

    windows
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
const APPLESCRIPT_WINDOWS: &str = r#"
    set output to ""
    tell application "System Events"
        repeat with proc in (processes whose visible is true)
            set procName to name of proc
            try
                repeat with win in windows of proc
                    set winPos to position of win
                    set winSize to size of win
                    set output to output & procName & tab & (name of win) & tab & (item 1 of winPos) & tab & (item 2 of winPos) & tab & (item 1 of winSize) & tab & (item 2 of winSize) & linefeed
                end repeat
            end try
        end repeat
    end tell
    return output
"#;

/// List windows on the current thread.
#[cfg(target_os = "linux")]
pub(crate) fn list_windows() -> Result<Vec<WindowRecord>, String> {
    use std::process::Command;

    let output = Command::new("wmctrl")
        .args(["-l", "-p", "-G", "-x"])
        .output()
        .map_err(|e| format!("wmctrl: {}", e))?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).to_string());
    }

    Ok(parse_wmctrl_windows(&String::from_utf8_lossy(&output.stdout)))
}

/// List windows on the current thread.
#[cfg(target_os = "macos")]
pub(crate) fn list_windows() -> Result<Vec<WindowRecord>, String> {
    use std::process::Command;

    let output = Command::new("osascript")
        .arg("-e")
        .arg(APPLESCRIPT_WINDOWS)
        .output()
        .map_err(|e| format!("osascript: {}", e))?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).to_string());
    }

    Ok(parse_applescript_windows(&String::from_utf8_lossy(&output.stdout)))
}

/// List windows on the current thread.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) fn list_windows() -> Result<Vec<WindowRecord>, String> {
    tracing::debug!("Window enumeration not available on this platform");
    Ok(Vec::new())
}

#[cfg(test)]
#[path = "windows_tests.rs"]
mod tests;
