use crate::movers::Mover;

/// The movers a fresh server starts with when seeding is enabled
pub fn default_movers() -> Vec<Mover> {
    [
        (1, "San Francisco MOV", 4.6, "+15615557689", 3780),
        (2, "Rapid Movers", 4.2, "+15617384568", 1240),
        (3, "Reliable Relocations", 4.7, "+14155538692", 2050),
        (4, "City Express Movers", 4.5, "+18025559482", 1870),
        (5, "Pro Mover Co.", 4.8, "+17024457893", 2500),
        (6, "MoveOn Solutions", 4.4, "+19025548765", 1730),
        (7, "All Star Moving", 4.3, "+13125587612", 1290),
        (8, "Swift Relocation", 4.6, "+12026758741", 3100),
        (9, "Speedy Transport", 4.5, "+14027759832", 1980),
        (10, "Premier Movers", 4.7, "+15022556478", 2300),
        (11, "Ace Relocators", 4.3, "+16024457812", 1670),
        (12, "Trusted Movers Co.", 4.6, "+17024459874", 2890),
        (13, "Urban Move", 4.5, "+18024458736", 3200),
        (14, "FastTrack Movers", 4.7, "+13027758495", 2150),
        (15, "Metro Moving Solutions", 4.4, "+14028854721", 1390),
    ]
    .into_iter()
    .map(|(id, name, rating, telephone_number, jobs_done)| Mover {
        id,
        name: name.to_string(),
        rating,
        telephone_number: telephone_number.to_string(),
        jobs_done,
    })
    .collect()
}
