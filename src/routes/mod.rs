use actix_web::web;

pub mod backend_health;
pub mod clubs;
pub mod competitions;
pub mod games;
pub mod players;
pub mod summary;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(clubs::get_clubs)
        .service(clubs::get_club)
        .service(clubs::get_club_stats)
        .service(clubs::get_club_games)
        .service(teams::get_teams)
        .service(teams::get_team)
        .service(teams::get_team_stats)
        .service(teams::get_team_games)
        .service(competitions::get_competitions)
        .service(games::get_upcoming_games)
        .service(games::get_recent_results)
        .service(players::get_top_scorers)
        .service(summary::get_weekly_summary);
}
