use crate::body::Body;
use crate::geom::rects_intersect;
use crate::traits::Collidable;

/// Which sides the body was pushed out of during a resolve pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub landed: bool,
    pub bonked: bool,
    pub walled: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Bottom,
    Top,
    Right,
    Left,
}

/// Single pass over `tiles` in the given order. Each overlapping tile is
/// resolved against one side, picked by where the body was at the start of the
/// tick: bottom, then top, then right, then left.
///
/// `jumped` keeps a same-tick jump impulse from being zeroed by a landing snap.
pub fn resolve<C: Collidable>(body: &mut Body, tiles: &[C], jumped: bool) -> Contacts {
    let mut contacts = Contacts::default();
    body.is_grounded = false;

    for tile in tiles {
        let t = tile.rect();
        if !rects_intersect(&body.rect, &t) {
            continue;
        }
        let Some(side) = penetration_side(body, tile) else {
            continue;
        };

        match side {
            Side::Bottom => {
                body.rect.set_bottom(t.top());
                body.land(jumped);
                contacts.landed = true;
            }
            Side::Top => {
                body.rect.set_top(t.bottom());
                body.velocity.y = 0.0;
                contacts.bonked = true;
            }
            Side::Right => {
                body.rect.set_right(t.left());
                contacts.walled = true;
            }
            Side::Left => {
                body.rect.set_left(t.right());
                contacts.walled = true;
            }
        }
    }

    body.sync_visual();
    contacts
}

fn penetration_side<C: Collidable>(body: &Body, tile: &C) -> Option<Side> {
    let cur = body.rect;
    let prev = body.previous_rect;
    let t = tile.rect();
    let tp = tile.previous_rect();

    // Previous-edge checks are inclusive: a body resting exactly on a tile
    // must keep resolving against it every tick.
    if cur.bottom() >= t.top() && prev.bottom() <= tp.top() {
        Some(Side::Bottom)
    } else if cur.top() <= t.bottom() && prev.top() >= tp.bottom() {
        Some(Side::Top)
    } else if cur.right() >= t.left() && prev.right() <= tp.left() {
        Some(Side::Right)
    } else if cur.left() <= t.right() && prev.left() >= tp.right() {
        Some(Side::Left)
    } else {
        None
    }
}

/// Treat `plane_y` as an infinitely wide floor.
pub fn resolve_ground_plane(body: &mut Body, plane_y: f32, jumped: bool) -> bool {
    if body.rect.bottom() < plane_y {
        return false;
    }
    body.rect.set_bottom(plane_y);
    body.land(jumped);
    body.sync_visual();
    true
}
