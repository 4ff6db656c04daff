//! Action execution against the backend.
//!
//! Every handler maps located image points through the current capture
//! target before touching the mouse. Elements without a center are skipped
//! with a warning rather than failing the action.

use deskhands_config::TunablesConfig;
use deskhands_protocols::{
    ActionError, ActionResult, KeyCode, LocatedElement, MouseButton, PcService, Point,
    ScrollDirection,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::keymap::{KeyCombo, KeyMapper};
use crate::listener::OutputListenerRegistry;
use crate::scroll::ScrollBatcher;
use crate::target::TargetState;

/// How `Input` treats existing field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Select the field content and type over it.
    Replace,
    /// Select the field content and erase it.
    Clear,
    /// Type at the element without clearing.
    #[default]
    Append,
}

/// Scroll behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScrollType {
    #[default]
    Once,
    UntilTop,
    UntilBottom,
    UntilLeft,
    UntilRight,
}

/// Runs primitive actions for one device.
pub struct ActionExecutor {
    service: Arc<dyn PcService>,
    targets: Arc<TargetState>,
    listeners: Arc<OutputListenerRegistry>,
    keymap: KeyMapper,
    scroll: ScrollBatcher,
    tunables: TunablesConfig,
    click_before_input: bool,
    platform: String,
}

impl ActionExecutor {
    pub fn new(
        service: Arc<dyn PcService>,
        targets: Arc<TargetState>,
        listeners: Arc<OutputListenerRegistry>,
        tunables: TunablesConfig,
        click_before_input: bool,
        platform: impl Into<String>,
    ) -> Self {
        let platform = platform.into();
        Self {
            keymap: KeyMapper::new(&platform),
            scroll: ScrollBatcher::from_tunables(&tunables),
            service,
            targets,
            listeners,
            tunables,
            click_before_input,
            platform,
        }
    }

    pub fn keymap(&self) -> &KeyMapper {
        &self.keymap
    }

    pub fn tunables(&self) -> &TunablesConfig {
        &self.tunables
    }

    /// Screen point for a located element, or `None` when it has no center.
    pub async fn screen_point(
        &self,
        element: Option<&LocatedElement>,
    ) -> Result<Option<Point>, ActionError> {
        let Some(center) = element.and_then(|e| e.center) else {
            return Ok(None);
        };
        let target = self.targets.current().await?;
        Ok(Some(target.to_screen(center)?))
    }

    // ========================================================================
    // Pointer actions
    // ========================================================================

    pub async fn tap(&self, element: Option<&LocatedElement>) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("tap", element));
        };
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        mouse.click(MouseButton::Left).await?;
        debug!("Tapped at {}", point);
        self.settle().await;
        Ok(performed(format!("Tapped at {}", point), point))
    }

    pub async fn double_click(
        &self,
        element: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("double click", element));
        };
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        mouse.double_click(MouseButton::Left).await?;
        debug!("Double clicked at {}", point);
        self.settle().await;
        Ok(performed(format!("Double clicked at {}", point), point))
    }

    pub async fn right_click(
        &self,
        element: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("right click", element));
        };
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        mouse.click(MouseButton::Right).await?;
        debug!("Right clicked at {}", point);
        Ok(performed(format!("Right clicked at {}", point), point))
    }

    pub async fn hover(&self, element: Option<&LocatedElement>) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("hover", element));
        };
        self.service.mouse().set_position(point).await?;
        debug!("Hovering at {}", point);
        sleep_ms(self.tunables.hover_delay_ms).await;
        Ok(performed(format!("Hovered at {}", point), point))
    }

    pub async fn long_press(
        &self,
        element: Option<&LocatedElement>,
        duration_ms: Option<u64>,
    ) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("long press", element));
        };
        let duration = duration_ms.unwrap_or(self.tunables.long_press_ms);
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        mouse.press_button(MouseButton::Left).await?;
        sleep_ms(duration).await;
        mouse.release_button(MouseButton::Left).await?;
        debug!("Long pressed at {} for {}ms", point, duration);
        Ok(performed(format!("Long pressed at {} for {}ms", point, duration), point))
    }

    pub async fn drag_and_drop(
        &self,
        from: Option<&LocatedElement>,
        to: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        let start = self.screen_point(from).await?;
        let end = self.screen_point(to).await?;
        let (Some(start), Some(end)) = (start, end) else {
            warn!(
                "Drag from {} to {} not located, skip drag and drop",
                describe(from),
                describe(to)
            );
            return Ok(ActionResult::skipped("Drag endpoints not located"));
        };

        let mouse = self.service.mouse();
        mouse.set_position(start).await?;
        mouse.press_button(MouseButton::Left).await?;
        mouse.set_position(end).await?;
        mouse.release_button(MouseButton::Left).await?;
        debug!("Dragged from {} to {}", start, end);
        self.settle().await;
        Ok(ActionResult::success(format!("Dragged from {} to {}", start, end)))
    }

    // ========================================================================
    // Text actions
    // ========================================================================

    pub async fn input(
        &self,
        value: &str,
        element: Option<&LocatedElement>,
        mode: InputMode,
    ) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            warn!("Element {} not located, typing at current focus", describe(element));
            self.type_text(value).await?;
            self.settle().await;
            return Ok(ActionResult::success("Typed at current focus"));
        };

        match mode {
            InputMode::Clear => self.clear_at(point, "").await?,
            InputMode::Replace => self.clear_at(point, value).await?,
            InputMode::Append => {
                let mouse = self.service.mouse();
                mouse.set_position(point).await?;
                if self.click_before_input {
                    mouse.click(MouseButton::Left).await?;
                    self.settle().await;
                }
                self.type_text(value).await?;
            }
        }
        self.settle().await;
        Ok(performed(format!("Input ({:?}) at {}", mode, point), point))
    }

    pub async fn clear_input(
        &self,
        element: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        let Some(point) = self.screen_point(element).await? else {
            return Ok(skip("clear input", element));
        };
        self.clear_at(point, "").await?;
        Ok(performed(format!("Cleared input at {}", point), point))
    }

    /// Triple-click to select the field content, then paste `text` over it.
    async fn clear_at(&self, point: Point, text: &str) -> Result<(), ActionError> {
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        for _ in 0..3 {
            mouse.click(MouseButton::Left).await?;
        }
        self.type_text(text).await
    }

    /// Put `text` on the clipboard and paste it with the platform shortcut.
    pub async fn type_text(&self, text: &str) -> Result<(), ActionError> {
        let paste = self.paste_chord()?;
        self.service.clipboard().set_text(text).await?;
        self.press(&paste).await?;
        debug!("Typed {} chars", text.chars().count());
        Ok(())
    }

    fn paste_chord(&self) -> Result<KeyCombo, ActionError> {
        let modifier = match self.platform.as_str() {
            "windows" | "linux" => KeyCode::LeftControl,
            "macos" => KeyCode::LeftCmd,
            other => return Err(ActionError::UnsupportedPlatform(other.to_string())),
        };
        Ok(KeyCombo::new(vec![modifier, KeyCode::V]))
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    pub async fn keyboard_press(
        &self,
        key_spec: &str,
        element: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        let combo = self.keymap.resolve_combo(key_spec)?;

        if let Some(point) = self.screen_point(element).await? {
            let mouse = self.service.mouse();
            mouse.set_position(point).await?;
            mouse.click(MouseButton::Left).await?;
            self.settle().await;
        }

        self.press(&combo).await?;
        debug!("Pressed {}", combo);
        self.settle().await;
        Ok(ActionResult::success(format!("Pressed {}", combo)))
    }

    /// Press every key of the combo, then release them.
    async fn press(&self, combo: &KeyCombo) -> Result<(), ActionError> {
        let keyboard = self.service.keyboard();
        keyboard.press_keys(combo.keys()).await?;
        keyboard.release_keys(combo.keys()).await?;
        Ok(())
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    pub async fn scroll(
        &self,
        scroll_type: ScrollType,
        direction: ScrollDirection,
        distance: Option<f64>,
        element: Option<&LocatedElement>,
    ) -> Result<ActionResult, ActionError> {
        if let Some(point) = self.screen_point(element).await? {
            self.service.mouse().set_position(point).await?;
            self.settle().await;
        }

        let mouse = self.service.mouse();
        let content = match scroll_type {
            ScrollType::UntilTop => {
                self.press(&KeyCombo::new(vec![KeyCode::LeftControl, KeyCode::Home]))
                    .await?;
                "Scrolled to top".to_string()
            }
            ScrollType::UntilBottom => {
                self.press(&KeyCombo::new(vec![KeyCode::LeftControl, KeyCode::End]))
                    .await?;
                "Scrolled to bottom".to_string()
            }
            ScrollType::UntilLeft => {
                self.scroll
                    .dispatch(mouse, ScrollDirection::Left, self.tunables.edge_scroll_distance)
                    .await?;
                "Scrolled to left edge".to_string()
            }
            ScrollType::UntilRight => {
                self.scroll
                    .dispatch(mouse, ScrollDirection::Right, self.tunables.edge_scroll_distance)
                    .await?;
                "Scrolled to right edge".to_string()
            }
            ScrollType::Once => {
                let distance = distance.unwrap_or(self.tunables.default_scroll_distance);
                let units = self.scroll.dispatch(mouse, direction, distance).await?;
                format!("Scrolled {:?} by {} wheel units", direction, units)
            }
        };
        Ok(ActionResult::success(content))
    }

    pub async fn swipe(
        &self,
        start: Option<&LocatedElement>,
        end: Option<&LocatedElement>,
        direction: Option<ScrollDirection>,
    ) -> Result<ActionResult, ActionError> {
        let (Some([sx, sy]), Some([ex, ey])) = (
            start.and_then(|e| e.center),
            end.and_then(|e| e.center),
        ) else {
            let missing: Vec<&str> = [("start", start), ("end", end)]
                .into_iter()
                .filter(|(_, e)| !e.is_some_and(LocatedElement::is_located))
                .map(|(name, _)| name)
                .collect();
            warn!("Swipe {} not located, skip swipe", missing.join(" and "));
            return Ok(ActionResult::skipped(format!(
                "Swipe {} not located",
                missing.join(" and ")
            )));
        };

        let (dx, dy) = (ex - sx, ey - sy);
        let direction = direction.unwrap_or_else(|| swipe_direction(dx, dy));
        let delta = if direction.is_vertical() { dy } else { dx }.round() as i32;

        let point = self.screen_point(start).await?.unwrap_or_default();
        let mouse = self.service.mouse();
        mouse.set_position(point).await?;
        mouse.scroll(direction, delta).await?;
        debug!("Swiped {:?} by {} from {}", direction, delta, point);
        Ok(performed(format!("Swiped {:?} by {}", direction, delta), point))
    }

    // ========================================================================
    // Output
    // ========================================================================

    pub fn output_final_answer(&self, value: &str, uuid: Option<&str>) -> ActionResult {
        let Some(uuid) = uuid.filter(|u| !u.is_empty()) else {
            debug!("No listener id for final answer, skip output");
            return ActionResult::skipped("No listener id");
        };

        let delivered = self.listeners.emit(uuid, value);
        if delivered == 0 {
            debug!("No output listeners for {}", uuid);
            return ActionResult::skipped(format!("No output listeners for {}", uuid));
        }
        ActionResult::success(format!("Delivered final answer to {} listeners", delivered))
            .with_metadata("listeners", serde_json::json!(delivered))
    }

    async fn settle(&self) {
        sleep_ms(self.tunables.settle_delay_ms).await;
    }
}

fn swipe_direction(dx: f64, dy: f64) -> ScrollDirection {
    if dx.abs() > dy.abs() {
        if dx < 0.0 {
            ScrollDirection::Left
        } else {
            ScrollDirection::Right
        }
    } else if dy < 0.0 {
        ScrollDirection::Up
    } else {
        ScrollDirection::Down
    }
}

async fn sleep_ms(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

fn describe(element: Option<&LocatedElement>) -> String {
    element.map_or_else(|| "<none>".to_string(), |e| e.to_string())
}

fn skip(action: &str, element: Option<&LocatedElement>) -> ActionResult {
    warn!("Element {} not located, skip {}", describe(element), action);
    ActionResult::skipped(format!("Element not located, skipped {}", action))
}

fn performed(content: String, point: Point) -> ActionResult {
    ActionResult::success(content)
        .with_metadata("x", serde_json::json!(point.x))
        .with_metadata("y", serde_json::json!(point.y))
}
