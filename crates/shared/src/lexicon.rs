//! Word valences for headline scoring, AFINN style: integers in -5..=5.

pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "without", "don't", "doesn't", "didn't", "isn't",
    "aren't", "wasn't", "weren't", "won't", "wouldn't", "can't", "cannot", "couldn't",
    "shouldn't", "hasn't", "haven't", "hadn't", "ain't",
];

pub(crate) const VALENCES: &[(&str, i32)] = &[
    // Strong positive
    ("breakthrough", 3),
    ("euphoria", 3),
    ("excellent", 3),
    ("outstanding", 5),
    ("record", 2),
    ("skyrocket", 3),
    ("skyrockets", 3),
    ("skyrocketing", 3),
    ("superb", 5),
    ("triumph", 4),
    ("win", 4),
    ("wins", 4),
    ("winner", 4),
    ("winning", 4),
    ("won", 3),
    ("wonderful", 4),
    // Market up moves
    ("approve", 2),
    ("approved", 2),
    ("approves", 2),
    ("approval", 2),
    ("beat", 2),
    ("beats", 2),
    ("best", 3),
    ("boom", 2),
    ("booming", 2),
    ("boost", 1),
    ("boosted", 1),
    ("boosts", 1),
    ("bull", 2),
    ("bullish", 2),
    ("climb", 1),
    ("climbs", 1),
    ("confidence", 2),
    ("confident", 2),
    ("embrace", 1),
    ("embraces", 1),
    ("gain", 2),
    ("gained", 2),
    ("gains", 2),
    ("good", 3),
    ("great", 3),
    ("grow", 1),
    ("growing", 1),
    ("growth", 2),
    ("high", 1),
    ("sky-high", 2),
    ("higher", 1),
    ("highs", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("hopes", 2),
    ("improve", 2),
    ("improved", 2),
    ("improves", 2),
    ("innovation", 1),
    ("jump", 1),
    ("jumps", 1),
    ("launch", 1),
    ("launches", 1),
    ("optimism", 2),
    ("optimistic", 2),
    ("profit", 2),
    ("profitable", 2),
    ("profits", 2),
    ("rally", 2),
    ("rallies", 2),
    ("rallying", 2),
    ("rebound", 2),
    ("rebounds", 2),
    ("recover", 2),
    ("recovers", 2),
    ("recovery", 2),
    ("rise", 1),
    ("rises", 1),
    ("rising", 1),
    ("secure", 2),
    ("soar", 2),
    ("soared", 2),
    ("soaring", 2),
    ("soars", 2),
    ("strong", 2),
    ("stronger", 2),
    ("success", 2),
    ("successful", 3),
    ("support", 2),
    ("supports", 2),
    ("surge", 2),
    ("surged", 2),
    ("surges", 2),
    ("surging", 2),
    ("up", 1),
    ("upgrade", 1),
    ("upgrades", 1),
    ("welcome", 2),
    ("welcomes", 2),
    // Mild positive
    ("adopt", 1),
    ("adoption", 1),
    ("benefit", 2),
    ("benefits", 2),
    ("easy", 1),
    ("fair", 2),
    ("favorable", 2),
    ("free", 1),
    ("interest", 1),
    ("like", 2),
    ("positive", 2),
    ("safe", 1),
    ("stable", 2),
    ("stability", 2),
    ("true", 2),
    ("trust", 1),
    ("validate", 1),
    // Mild negative
    ("concern", -1),
    ("concerned", -2),
    ("concerns", -1),
    ("delay", -1),
    ("delayed", -1),
    ("delays", -1),
    ("doubt", -1),
    ("doubts", -1),
    ("down", -1),
    ("drop", -1),
    ("dropped", -1),
    ("drops", -1),
    ("fall", -1),
    ("falls", -1),
    ("falling", -1),
    ("fell", -1),
    ("low", -1),
    ("lower", -1),
    ("lows", -1),
    ("pressure", -1),
    ("probe", -1),
    ("questions", -1),
    ("risk", -2),
    ("risks", -2),
    ("risky", -2),
    ("slip", -1),
    ("slips", -1),
    ("slow", -2),
    ("uncertain", -1),
    ("uncertainty", -1),
    ("volatile", -2),
    ("volatility", -1),
    ("warn", -2),
    ("warning", -3),
    ("warns", -2),
    ("weak", -2),
    ("weaker", -2),
    ("worry", -3),
    ("worries", -3),
    // Market down moves
    ("bear", -2),
    ("bearish", -2),
    ("collapse", -2),
    ("collapsed", -2),
    ("collapses", -2),
    ("crackdown", -2),
    ("crash", -2),
    ("free-fall", -3),
    ("freefall", -3),
    ("crashed", -2),
    ("crashes", -2),
    ("decline", -1),
    ("declines", -1),
    ("default", -2),
    ("dump", -1),
    ("dumps", -1),
    ("fear", -2),
    ("fears", -2),
    ("loss", -3),
    ("losses", -3),
    ("lose", -3),
    ("loses", -3),
    ("lost", -3),
    ("outage", -2),
    ("panic", -3),
    ("plunge", -2),
    ("plunged", -2),
    ("plunges", -2),
    ("plunging", -2),
    ("reject", -1),
    ("rejected", -1),
    ("rejects", -1),
    ("rug-pull", -3),
    ("rug-pulls", -3),
    ("selloff", -2),
    ("selloffs", -2),
    ("sell-off", -2),
    ("sell-offs", -2),
    ("sink", -2),
    ("sinks", -2),
    ("slide", -1),
    ("slides", -1),
    ("slump", -2),
    ("slumps", -2),
    ("struggle", -2),
    ("struggles", -2),
    ("tumble", -2),
    ("tumbles", -2),
    ("wipe", -1),
    ("wiped", -1),
    // Strong negative
    ("ban", -2),
    ("banned", -2),
    ("bans", -2),
    ("bankrupt", -3),
    ("bankruptcy", -3),
    ("catastrophe", -3),
    ("charged", -3),
    ("crime", -3),
    ("crisis", -3),
    ("disaster", -2),
    ("exploit", -2),
    ("exploited", -3),
    ("fail", -2),
    ("failed", -2),
    ("fails", -2),
    ("failure", -2),
    ("fraud", -4),
    ("fraudulent", -4),
    ("hack", -1),
    ("hacked", -1),
    ("hacker", -2),
    ("hackers", -2),
    ("illegal", -3),
    ("investigation", -1),
    ("lawsuit", -2),
    ("liquidated", -2),
    ("manipulation", -1),
    ("penalty", -2),
    ("ponzi", -3),
    ("scam", -2),
    ("scams", -2),
    ("scandal", -3),
    ("seize", -1),
    ("seized", -1),
    ("stolen", -2),
    ("sue", -2),
    ("sued", -2),
    ("sues", -2),
    ("terrible", -3),
    ("theft", -2),
    ("threat", -2),
    ("threatens", -2),
    ("worst", -3),
];
