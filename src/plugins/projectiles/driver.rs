//! Fixed-step driver: one `tick` per slot per fixed frame, in slot order.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::messages::BulletReclaimed;
use super::pool::BulletPool;

pub fn tick_bullets(
    time: Res<Time<Fixed>>,
    mut pool: ResMut<BulletPool>,
    mut writer: MessageWriter<BulletReclaimed>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    writer.write_batch(pool.tick(dt));
}

pub fn log_reclaimed_bullets(mut reader: MessageReader<BulletReclaimed>) {
    for msg in reader.read() {
        debug!(
            "Bullet slot {} reclaimed ({:?}, hit: {:?})",
            msg.handle.index(),
            msg.cause,
            msg.hit
        );
    }
}
