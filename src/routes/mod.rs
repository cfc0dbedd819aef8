use actix_web::web;

pub mod backend_health;
pub mod matches;
pub mod players;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/players")
            .service(players::list_players)
            .service(players::batting_leaderboard)
            .service(players::bowling_leaderboard)
            .service(players::create_player)
            .service(players::upload_player_image)
            .service(players::get_player),
    );

    cfg.service(
        web::scope("/matches")
            .service(matches::list_matches)
            .service(matches::create_match)
            .service(matches::get_match_stats)
            .service(matches::get_match)
            .service(matches::update_match)
            .service(matches::delete_match),
    );
}
