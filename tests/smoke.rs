mod common;

use pooled_shooter::common::tunables::Tunables;
use pooled_shooter::plugins::projectiles::components::BulletSprite;
use pooled_shooter::plugins::projectiles::pool::BulletPool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn pool_is_sized_from_tunables_with_one_proxy_per_slot() {
    let mut app = common::app_headless();
    app.update();

    let expected = Tunables::default().bullet_pool_size;
    let pool = app.world().resource::<BulletPool>();
    assert_eq!(pool.capacity(), expected);
    assert_eq!(pool.available(), expected);

    let proxies = app
        .world_mut()
        .query::<&BulletSprite>()
        .iter(app.world())
        .count();
    assert_eq!(proxies, expected);
}

#[test]
fn player_interpolation_pipeline_is_wired() {
    let mut app = common::app_headless();

    for _ in 0..5 {
        app.update();
    }

    let ok = app
        .world_mut()
        .query::<(
            &pooled_shooter::plugins::player::Player,
            &avian2d::prelude::TranslationExtrapolation,
        )>()
        .iter(app.world())
        .next()
        .is_some();

    assert!(
        ok,
        "Player should opt in to smoothing via TranslationExtrapolation"
    );
}
