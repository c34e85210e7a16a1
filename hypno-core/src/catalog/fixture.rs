//! The studio's reference portfolio, in display order.

use hypno_model::{
    ProjectId, ProjectRecord, ProjectStats, ProjectStatus, Rating,
};

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    short_description: &str,
    platform: &str,
    status: ProjectStatus,
    category: &str,
    tags: &[&str],
    image: &str,
    stats: (&str, &str, Rating),
    launch_date: &str,
    featured: bool,
) -> ProjectRecord {
    let (players, revenue, rating) = stats;
    ProjectRecord {
        id: ProjectId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        short_description: Some(short_description.to_string()),
        platform: platform.to_string(),
        status,
        category: category.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        image: image.to_string(),
        stats: ProjectStats {
            players: players.to_string(),
            revenue: revenue.to_string(),
            rating,
        },
        launch_date: launch_date.to_string(),
        featured,
    }
}

pub(crate) fn reference_projects() -> Vec<ProjectRecord> {
    use ProjectStatus::*;

    vec![
        project(
            1,
            "Galactic Miners",
            "Un juego de estrategia y construcción en el espacio donde los jugadores exploran galaxias, extraen recursos y construyen imperios interestelares. Featuring multiplayer masivo y economía player-driven.",
            "Estrategia espacial con construcción de imperios y economía player-driven",
            "PC/Steam",
            Live,
            "Strategy",
            &["Space", "Mining", "Strategy", "Multiplayer", "Economy"],
            "/steve_thinking.png",
            ("15K+", "$2.3M", Rating::Score(4.8)),
            "2023-08",
            true,
        ),
        project(
            2,
            "Pixel Legends",
            "RPG retro con mecánicas modernas, featuring un sistema de crafting profundo y combate estratégico por turnos. Incluye más de 200 items únicos y 50+ dungeons procedurales.",
            "RPG retro con crafting profundo y combate táctico por turnos",
            "Mobile",
            Growing,
            "RPG",
            &["Pixel Art", "RPG", "Mobile", "Crafting", "Turn-based"],
            "/steve_with_a_alert_icon.png",
            ("8.2K", "$850K", Rating::Score(4.6)),
            "2023-11",
            true,
        ),
        project(
            3,
            "Neon Racers",
            "Juego de carreras futurista con elementos de personalización extrema y física realista en circuitos cyberpunk. Features 20+ vehículos únicos y sistema de tuning avanzado.",
            "Carreras cyberpunk con personalización extrema y física realista",
            "Console",
            Development,
            "Racing",
            &["Cyberpunk", "Racing", "Neon", "Physics", "Customization"],
            "/steve_showing_with_is_hands.png",
            ("Soon", "TBA", Rating::from("N/A")),
            "2024-Q2",
            true,
        ),
        project(
            4,
            "Mystic Realms",
            "MMORPG de fantasía con mundo abierto, sistema de magia único y mecánicas de guild warfare épicas. Incluye 8 clases jugables y más de 1000 hechizos únicos.",
            "MMORPG de fantasía con sistema de magia único y guild warfare",
            "PC/Mobile",
            Live,
            "MMORPG",
            &["Fantasy", "Open World", "Magic", "Guild Wars", "Classes"],
            "/steve_thinking.png",
            ("25K+", "$4.1M", Rating::Score(4.9)),
            "2023-03",
            false,
        ),
        project(
            5,
            "Code Breakers",
            "Puzzle game educativo que enseña programación a través de desafíos interactivos y mecánicas de hacking. Covering Python, JavaScript, y conceptos de ciberseguridad.",
            "Puzzle educativo que enseña programación y hacking ético",
            "Web/Educational",
            Growing,
            "Educational",
            &["Programming", "Puzzle", "Education", "Hacking", "Python"],
            "/steve_with_a_alert_icon.png",
            ("12K", "$650K", Rating::Score(4.7)),
            "2023-09",
            false,
        ),
        project(
            6,
            "Arena Champions",
            "Battle royale táctico con elementos MOBA, featuring 100 jugadores en combates estratégicos intensos. Includes unique champion abilities y ranked competitive play.",
            "Battle royale táctico con elementos MOBA y habilidades únicas",
            "PC/Console",
            Development,
            "Battle Royale",
            &["Battle Royale", "MOBA", "Tactical", "100 Players", "Competitive"],
            "/steve_showing_with_is_hands.png",
            ("Beta Soon", "TBA", Rating::from("N/A")),
            "2024-Q3",
            false,
        ),
        project(
            7,
            "Crystal Defenders",
            "Tower defense con mecánicas RPG donde players controlan heroes únicos mientras defienden cristales mágicos. Features co-op multiplayer y progression system profundo.",
            "Tower defense con heroes RPG y elementos cooperativos",
            "Mobile/PC",
            Live,
            "Tower Defense",
            &["Tower Defense", "RPG", "Co-op", "Heroes", "Magic"],
            "/steve_thinking.png",
            ("18K", "$1.2M", Rating::Score(4.5)),
            "2023-06",
            false,
        ),
        project(
            8,
            "Void Explorers",
            "Roguelike espacial con narrativa procedural donde cada run cuenta una historia única. Features ship customization y discovery of ancient alien artifacts.",
            "Roguelike espacial con narrativa procedural y artefactos alienígenas",
            "PC/Steam",
            Growing,
            "Roguelike",
            &["Roguelike", "Space", "Procedural", "Narrative", "Exploration"],
            "/steve_with_a_alert_icon.png",
            ("6.8K", "$420K", Rating::Score(4.4)),
            "2023-12",
            false,
        ),
        project(
            9,
            "Farming Legends",
            "Simulador de granja con elementos de gestión de recursos y construcción de comunidad. Players pueden crear granjas únicas y comerciar con otros jugadores globalmente.",
            "Simulador de granja con gestión de recursos y trading global",
            "Mobile/Switch",
            Development,
            "Simulation",
            &[
                "Farming",
                "Simulation",
                "Trading",
                "Community",
                "Resource Management",
            ],
            "/steve_showing_with_is_hands.png",
            ("Coming Soon", "TBA", Rating::from("N/A")),
            "2024-Q1",
            false,
        ),
    ]
}
