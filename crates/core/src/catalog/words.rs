//! Word pools for each catalog entry, keyed by category.

use super::RoomWords;

pub(super) const PRISON_ROOM: RoomWords = RoomWords {
    adjectives: &[
        "dark", "damp", "cold", "claustrophobic", "silent", "grimy", "decaying", "chained",
        "windowless", "oppressive", "rusted", "musty", "moldy", "stench-filled", "narrow", "cursed",
    ],
    features: &[
        "iron bars", "rusty chains", "flickering torches", "padlocked cells", "old skeletons",
        "piles of bones", "bloodstained bricks", "torture devices", "skeletal remains",
        "rotting corpses", "broken mirrors", "cracked stones", "ring of keys",
        "buckets filled with indistinguishable liquids", "large maggots", "faded journals",
    ],
    sounds: &[
        "rattling chains", "a ghostly moan", "dripping water", "beating hearts", "crying moans",
        "harmonica tunes", "crackling torches", "scraping metal", "guillotine thuds",
        "screams of pain", "gusts of wind through cracks", "distant, ghostly moans",
        "chanting in an unknown language", "phantom breathing", "whispers with no source",
        "rattling bones",
    ],
    actions: &[
        "making you feel trapped", "echoing your footsteps eerily", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const TREASURE_ROOM: RoomWords = RoomWords {
    adjectives: &[
        "golden", "sparkling", "shimmering", "opulent", "bright", "iridescent", "gold plated",
        "immeasurable", "priceless", "glittering", "gilded", "radiant", "dazzling", "gleaming",
        "bejeweled", "lustrous",
    ],
    features: &[
        "chests of gold", "gem-encrusted goblets", "piles of treasure", "heaps of glittering coins",
        "overflowing jewel boxes", "crowns studded with rubies", "rings stacked on bones",
        "chalices dripping with emeralds", "scepters of silver and sapphire",
        "trinkets scattered across velvet", "ancient coins with faded faces",
        "treasures from lost empires", "silver coins spilling from cracked jars",
        "foreign currencies unknown to this land", "bloodstained copper tokens",
        "platinum bars sealed in wax",
    ],
    sounds: &[
        "coins clinking", "a soft hum of magic", "echoes of wealth",
        "a faint chime from unseen jewelry", "whispers of greedy wishes",
        "the creak of a golden chest lid", "rattling gems in glass jars",
        "a slow metallic slide of treasure shifting", "muffled footsteps on velvet carpet",
        "the sparkle of magic-infused gold", "distant laughter echoing through the vault",
        "a harp string plucked by no hand", "tinkling chains draped over ancient crowns",
        "clattering gems pouring from a broken urn", "soft rustling of silk wrapping artifacts",
        "sighs of forgotten kings trapped in amulets",
    ],
    actions: &[
        "enticing you closer", "blinding you with brilliance", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const TRAP_ROOM: RoomWords = RoomWords {
    adjectives: &[
        "trap-rigged", "decaying", "illusionary", "haunted", "tampered", "rusted", "maze-like",
        "timeworn", "volatile", "crumbled", "dust-choked", "misleading", "spike-laced",
        "foul-smelling", "mechanical", "trap-infested",
    ],
    features: &[
        "pressure plates", "tripwires", "spike pits", "swinging axes", "falling rocks",
        "laser beams", "levitating sharks", "piranha tanks", "hell hounds", "glue traps",
        "spaces ridden with animal traps", "collapsing floors", "hidden crossbows",
        "dart holes in the walls", "illusory pathways", "slippery tiles",
    ],
    sounds: &[
        "clicking mechanisms", "creaking floors", "a sudden snap", "chains rattling above",
        "stones grinding underfoot", "many alarm clocks going off", "air horns",
        "ear bursting sirens", "a faint ticking", "gears turning slowly", "metal scraping on stone",
        "arrows whizzing past", "a trap resetting itself", "chainsaws starting",
        "trumpets crescendoing the longer you remain", "orchestra music playing dramatically",
    ],
    actions: &[
        "keeping you on edge", "daring you to move", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const MONSTER_LAIR: RoomWords = RoomWords {
    adjectives: &[
        "smelly", "bloodstained", "menacing", "gory", "shadowy", "vile", "stench-filled", "beastly",
        "savage", "feral", "chaotic", "repugnant", "damp", "noisy", "haunted", "torn",
    ],
    features: &[
        "bones", "claw marks", "torn fabrics", "blood smears on the walls", "cracked armor",
        "bite marks", "shedded basilisk skins", "impish fairies", "chupacabra fangs",
        "possessed bears", "cursed dolls", "enchanted jackalope antlers",
        "portraits of mythical creatures", "half-eaten corpses", "gnawed skulls",
        "thick claw furrows",
    ],
    sounds: &[
        "growling", "heavy breathing", "a low snarl", "bones crunching underfoot",
        "deep guttural roars", "dragons snoring", "banshee screeches", "witches cackling",
        "claws scraping stone", "incoherent beastly murmurs", "wet chewing noises", "distant howls",
        "a low, menacing hiss", "werewolves howling", "mouths gnawing on meat",
        "snarling echoes",
    ],
    actions: &[
        "sending chills down your spine", "warning you to leave", "inviting you in",
        "filling the air with unease", "making you feel watched", "urging you to move forward",
        "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
        "pushing you back with an unseen force",
    ],
};

pub(super) const SECRET_ROOM: RoomWords = RoomWords {
    adjectives: &[
        "hidden", "forgotten", "quiet", "mysterious", "undisturbed", "concealed", "sealed", "dusty",
        "dim", "ancient", "hollow", "unmarked", "lost", "abandoned", "crumbling", "shrouded",
    ],
    features: &[
        "dusty furniture", "hidden bookshelves", "worn paintings", "oak bookshelves",
        "dust-covered artifacts", "faded tapestries", "concealed levers", "secret passageways",
        "various art supplies", "loose floor tiles", "mysterious sigils", "ornate lockboxes",
        "ancient scrolls", "trapdoor handles", "phoenix ashes", "four leaf clovers",
    ],
    sounds: &[
        "creaking wood", "hush of wind", "nothing at all", "a faint rustle behind the walls",
        "creaking floorboards", "a whisper that fades too quickly",
        "dripping from somewhere unseen", "electric buzzing", "pages flipping on their own",
        "old lock clicking shut", "the shuffle of parchment", "muffled footsteps from above",
        "a sudden hush", "a tick-tock from a hidden clock", "dust falling in silence",
        "an eerie chord from nowhere",
    ],
    actions: &[
        "whispering secrets to you", "inviting you to explore", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const ARMORY: RoomWords = RoomWords {
    adjectives: &[
        "metallic", "cluttered", "rusty", "gleaming", "war-torn", "dusty", "well-stocked",
        "organized", "ancient", "battle-worn", "reinforced", "dimly-lit", "secure", "steel-lined",
        "echoing", "narrow",
    ],
    features: &[
        "racks of weapons", "shields", "headless horsemen in armor", "rusted armor",
        "chains draped over hooks", "sparring weapons set in orderly rows",
        "locked chests of explosives", "battered helmets on hooks", "wooden shields",
        "weightless shields", "diamond shields", "photos of knights long forgotten",
        "practice swords dulled from use", "shield emblems denoting past factions",
        "netting used for entrapment", "heavy gloves on a bench",
    ],
    sounds: &[
        "clinking metal", "scraping blades", "a distant clang", "metal clashing against metal",
        "a loud clang of dropped armor", "soft creaking of leather straps",
        "chains rattling in the corner", "echoes of distant combat drills",
        "a warhorn call muffled through stone", "faint hammering from a forge",
        "anvil strikes ringing in rhythm", "weapons clinking as racks shift",
        "a quiet metallic hum from enchanted blades", "rust flakes falling like soft rain",
        "grunts from a nearby sparring session", "a sword unsheathing with a hiss",
    ],
    actions: &[
        "readying for combat", "echoing ancient battles", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const LIBRARY: RoomWords = RoomWords {
    adjectives: &[
        "quiet", "dusty", "book-lined", "silent", "intellectual", "ancient", "dimly-lit", "shadowy",
        "forgotten", "cluttered", "candle-lit", "mossy", "mysterious", "timeworn", "crumbling",
        "enchanted",
    ],
    features: &[
        "scrolls", "old tomes", "magic infused chess set", "high shelves", "towering bookshelves",
        "scroll racks", "rolling ladders", "glowing tomes", "cobweb-covered shelves",
        "ancient manuscripts", "dusty scrolls", "cracked reading desks", "magical orbs",
        "ink-stained desks", "spellbound books", "charcoal drawings",
    ],
    sounds: &[
        "rustling pages", "quill scratches", "book bindings creaking", "soft footsteps on stone",
        "quills scratching parchment", "a book slamming shut in the distance",
        "gentle creaking of wooden shelves", "whispered voices with no source",
        "crackling from a candle flame", "faint magical humming", "pages flipping by themselves",
        "the hiss of old bindings", "distant echo of chanting", "a sudden thud of falling books",
        "ink dripping onto paper", "muffled voices in unknown tongues",
    ],
    actions: &[
        "filling you with curiosity", "guiding you to forgotten knowledge", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const ALCHEMY_LAB: RoomWords = RoomWords {
    adjectives: &[
        "chemical", "botanical", "bubbling", "toxic", "glowing", "mysterious", "sulfurous",
        "pungent", "flickering", "volatile", "arcane", "crystalline", "fumy", "boiling", "glassy",
        "unsettling",
    ],
    features: &[
        "glass beakers", "pots growing exotic plants", "boiling flasks", "glass vials",
        "bubbling cauldrons", "potion bottles", "scrolls of transmutation", "burnt wooden tables",
        "glowing beakers", "mortar and pestle", "mysterious herbs", "stained journals",
        "runes etched in stone", "hanging dried plants", "twisting coils", "dripping tubes",
    ],
    sounds: &[
        "bubbling liquid", "glass clinking", "hissing fumes", "a faint chemical hiss",
        "soft fizzing", "metal tools scraping stone", "corks popping from flasks",
        "sputtering flames", "fluid dripping steadily", "vials shaking slightly",
        "a kettle-like whistle", "the crackle of magical energy", "pages turning softly",
        "an unsettling hum", "tubes vibrating lightly", "steam venting into the air",
    ],
    actions: &[
        "making your eyes water", "intriguing your mind", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const PUZZLE_ROOM: RoomWords = RoomWords {
    adjectives: &[
        "confusing", "patterned", "mysterious", "clever", "cryptic", "intricate", "confounding",
        "enigmatic", "arcane", "symbol-covered", "puzzling", "ornate", "calculated",
        "riddle-filled", "mechanical", "segmented",
    ],
    features: &[
        "runes", "tiles", "switches", "stone tiles etched with symbols", "rotating statues",
        "glowing runes", "sliding floor panels", "lever arrays", "pressure plates",
        "locked pedestals", "rotating rings", "switch mechanisms", "murky mirrors",
        "glimmering glyphs", "numbered columns", "sequence panels",
    ],
    sounds: &[
        "gears turning", "tiles clicking", "mechanical whirrs", "clicking gears",
        "a soft hum of magic", "whirring mechanisms", "metal sliding into place", "tiles shifting",
        "runes glowing with a pulse", "a faint ticking", "stones grinding together",
        "magical chimes", "echoes of a riddle being whispered", "crystal resonating softly",
        "water dripping rhythmically", "distant clanking",
    ],
    actions: &[
        "daring you to solve them", "twisting your logic", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};

pub(super) const MAGIC_CHAMBER: RoomWords = RoomWords {
    adjectives: &[
        "arcane", "ethereal", "glowing", "charged", "mystical", "glimmering", "enchanted",
        "radiant", "whispering", "floating", "runed", "sparkling", "hallowed", "twinkling",
        "resonant", "pulsating",
    ],
    features: &[
        "floating symbols", "glowing glyphs", "magic circles", "glowing runes", "floating crystals",
        "hovering spellbooks", "arcane circles", "enchanted candles", "levitating orbs",
        "mystic sigils", "wisps of light", "pulsing glyphs", "shimmering veils", "ancient relics",
        "drifting scrolls", "luminescent fog",
    ],
    sounds: &[
        "magical humming", "whispers of spells", "a burst of energy", "a low arcane hum",
        "whispers in an unknown tongue", "a gentle crackling of magical energy",
        "the soft chime of floating crystals", "pages rustling without wind",
        "an echo of distant chanting", "pulsing magical energy", "soft harmonic vibrations",
        "a tinkling like wind chimes", "a rush of invisible currents",
        "a melodic tone from nowhere", "crackles of unstable magic",
        "distant laughter fading in and out",
    ],
    actions: &[
        "empowering your soul", "tingling your senses", "inviting you in",
        "sending chills down your spine", "filling the air with unease", "making you feel watched",
        "urging you to move forward", "making the air feel heavy", "bringing a sense of nostalgia",
        "whispering unintelligible secrets", "creating an eerie tension",
        "pulling you toward the center", "giving an overwhelming feeling of dread",
        "making the walls seem alive", "distorting the space around you", "tempting you to explore",
    ],
};
