//! Built-in word tables.
//!
//! Keys are lowercase. Valence weights are in `[-1, 1]`, arousal dimension
//! weights in `[0, 1]`.

/// Emotional valence of common words.
pub(crate) const VALENCE_WORDS: &[(&str, f32)] = &[
    // Warmth / love
    ("love", 0.95),
    ("adore", 0.9),
    ("cherish", 0.85),
    ("devotion", 0.8),
    ("affection", 0.8),
    ("tenderness", 0.75),
    ("care", 0.7),
    ("warm", 0.7),
    ("wonderful", 0.8),
    ("amazing", 0.75),
    ("beautiful", 0.8),
    ("lovely", 0.75),
    ("happy", 0.7),
    ("joy", 0.8),
    ("delighted", 0.75),
    ("pleased", 0.6),
    ("smile", 0.6),
    ("hug", 0.7),
    ("gentle", 0.6),
    ("sweet", 0.65),
    ("kind", 0.6),
    ("soft", 0.5),
    ("thank", 0.5),
    ("grateful", 0.7),
    // Playful
    ("play", 0.7),
    ("fun", 0.7),
    ("game", 0.6),
    ("silly", 0.65),
    ("laugh", 0.75),
    ("giggle", 0.7),
    ("joke", 0.6),
    ("funny", 0.65),
    ("magic", 0.7),
    ("pretend", 0.5),
    ("surprise", 0.5),
    ("candy", 0.5),
    // Fear
    ("fear", -0.7),
    ("afraid", -0.7),
    ("scared", -0.75),
    ("terrified", -0.9),
    ("anxious", -0.6),
    ("worry", -0.5),
    ("panic", -0.8),
    ("dread", -0.75),
    ("horror", -0.85),
    ("nervous", -0.5),
    ("terror", -0.9),
    ("danger", -0.7),
    // Void / emptiness
    ("empty", -0.5),
    ("nothing", -0.55),
    ("numb", -0.6),
    ("hollow", -0.55),
    ("void", -0.6),
    ("alone", -0.6),
    ("lonely", -0.7),
    ("isolated", -0.65),
    ("meaningless", -0.7),
    ("pointless", -0.65),
    ("dead", -0.8),
    // Pain / suffering
    ("hate", -0.9),
    ("terrible", -0.8),
    ("awful", -0.7),
    ("horrible", -0.8),
    ("sad", -0.6),
    ("angry", -0.7),
    ("hurt", -0.7),
    ("pain", -0.8),
    ("suffer", -0.8),
    ("worthless", -0.85),
    // Russian
    ("люблю", 0.9),
    ("радость", 0.8),
    ("счастье", 0.85),
    ("хорошо", 0.5),
    ("ненавижу", -0.9),
    ("страшно", -0.7),
    ("больно", -0.8),
    ("одиноко", -0.7),
];

/// Conflict, urgency, pressure.
pub(crate) const TENSION_WORDS: &[(&str, f32)] = &[
    ("must", 0.6),
    ("need", 0.5),
    ("urgent", 0.8),
    ("now", 0.4),
    ("stop", 0.7),
    ("danger", 0.8),
    ("crisis", 0.8),
    ("emergency", 0.9),
    ("fight", 0.7),
    ("attack", 0.8),
    ("pressure", 0.6),
    ("stress", 0.5),
];

/// Surprise, unfamiliarity.
pub(crate) const NOVELTY_WORDS: &[(&str, f32)] = &[
    ("surprise", 0.7),
    ("suddenly", 0.6),
    ("unexpected", 0.7),
    ("shock", 0.8),
    ("strange", 0.5),
    ("weird", 0.4),
    ("new", 0.4),
    ("different", 0.3),
    ("unknown", 0.5),
    ("discover", 0.5),
    ("change", 0.4),
];

/// Self-reference, meta-cognition.
pub(crate) const RECURSION_WORDS: &[(&str, f32)] = &[
    ("myself", 0.6),
    ("yourself", 0.5),
    ("self", 0.6),
    ("remember", 0.5),
    ("think", 0.4),
    ("feel", 0.4),
    ("feeling", 0.4),
    ("realize", 0.5),
    ("recognize", 0.5),
    ("reflect", 0.6),
];
