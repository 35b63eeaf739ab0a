use super::{layout, Side, SliderCore};

pub(super) fn set_speed(core: &mut SliderCore, speed: f32) {
    let speed = speed.max(0.0);
    if speed == core.speed {
        return;
    }
    core.speed = speed;
    layout::rebuild(core);
}

pub(super) fn set_side(core: &mut SliderCore, side: Side) {
    if side == core.side {
        return;
    }
    core.side = side;
    layout::rebuild(core);
}

pub(super) fn set_visible(core: &mut SliderCore, visible: bool) {
    core.visible = visible;
}

pub(super) fn set_hovered(core: &mut SliderCore, hovered: bool) {
    core.hovered = hovered;
}
