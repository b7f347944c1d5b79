//! Static emoji lexicon.
//!
//! A curated table of emoji characters with searchable names and keyword
//! lists. Names use the snake_case shortcodes people already know from chat
//! apps. The table is immutable and its iteration order is fixed, so local
//! search output is deterministic for a given build.

/// One lexicon record: an emoji character plus its searchable name and keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiDef {
    pub character: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const LEXICON: &[EmojiDef] = &[
    // Smileys
    EmojiDef { character: "😀", name: "grinning", keywords: &["face", "smile", "happy"] },
    EmojiDef { character: "😃", name: "smiley", keywords: &["face", "happy", "joy"] },
    EmojiDef { character: "😄", name: "smile", keywords: &["face", "happy", "laugh"] },
    EmojiDef { character: "😁", name: "grin", keywords: &["face", "happy", "smile"] },
    EmojiDef { character: "😆", name: "laughing", keywords: &["face", "happy", "haha", "satisfied"] },
    EmojiDef { character: "😅", name: "sweat_smile", keywords: &["face", "hot", "relief", "nervous"] },
    EmojiDef { character: "😂", name: "joy", keywords: &["face", "tears", "laugh", "haha"] },
    EmojiDef { character: "🤣", name: "rofl", keywords: &["face", "rolling", "floor", "laughing"] },
    EmojiDef { character: "😊", name: "blush", keywords: &["face", "smile", "happy", "proud"] },
    EmojiDef { character: "😇", name: "innocent", keywords: &["face", "angel", "halo"] },
    EmojiDef { character: "🙂", name: "slightly_smiling_face", keywords: &["face", "smile"] },
    EmojiDef { character: "😉", name: "wink", keywords: &["face", "flirt", "playful"] },
    EmojiDef { character: "😌", name: "relieved", keywords: &["face", "calm", "peaceful"] },
    EmojiDef { character: "😍", name: "heart_eyes", keywords: &["face", "love", "crush", "adore"] },
    EmojiDef { character: "😘", name: "kissing_heart", keywords: &["face", "love", "kiss", "flirt"] },
    EmojiDef { character: "😋", name: "yum", keywords: &["face", "tongue", "delicious", "tasty"] },
    EmojiDef { character: "😛", name: "stuck_out_tongue", keywords: &["face", "cheeky", "playful"] },
    EmojiDef { character: "🤪", name: "zany_face", keywords: &["face", "goofy", "wacky", "crazy"] },
    EmojiDef { character: "😎", name: "sunglasses", keywords: &["face", "cool", "chill"] },
    EmojiDef { character: "🤓", name: "nerd_face", keywords: &["face", "geek", "glasses", "smart"] },
    EmojiDef { character: "🤔", name: "thinking", keywords: &["face", "hmm", "wondering", "consider"] },
    EmojiDef { character: "🤨", name: "raised_eyebrow", keywords: &["face", "suspicious", "skeptic"] },
    EmojiDef { character: "🧐", name: "monocle_face", keywords: &["face", "inspect", "fancy"] },
    EmojiDef { character: "😐", name: "neutral_face", keywords: &["face", "meh", "blank"] },
    EmojiDef { character: "😑", name: "expressionless", keywords: &["face", "blank", "deadpan"] },
    EmojiDef { character: "😏", name: "smirk", keywords: &["face", "smug", "sly"] },
    EmojiDef { character: "😒", name: "unamused", keywords: &["face", "bored", "meh"] },
    EmojiDef { character: "🙄", name: "roll_eyes", keywords: &["face", "eyeroll", "whatever", "annoyed"] },
    EmojiDef { character: "😬", name: "grimacing", keywords: &["face", "awkward", "cringe", "teeth"] },
    EmojiDef { character: "🤥", name: "lying_face", keywords: &["face", "liar", "pinocchio"] },
    EmojiDef { character: "🤗", name: "hugs", keywords: &["face", "hug", "warm", "welcome"] },
    EmojiDef { character: "🤫", name: "shushing_face", keywords: &["face", "quiet", "secret", "hush"] },
    EmojiDef { character: "🤭", name: "hand_over_mouth", keywords: &["face", "giggle", "oops"] },
    EmojiDef { character: "😔", name: "pensive", keywords: &["face", "sad", "thoughtful", "sorry"] },
    EmojiDef { character: "😪", name: "sleepy", keywords: &["face", "tired", "rest", "nap"] },
    EmojiDef { character: "🤤", name: "drooling_face", keywords: &["face", "drool", "tasty", "desire"] },
    EmojiDef { character: "😴", name: "sleeping", keywords: &["face", "tired", "night", "snore"] },
    EmojiDef { character: "😷", name: "mask", keywords: &["face", "sick", "ill", "doctor"] },
    EmojiDef { character: "🤒", name: "face_with_thermometer", keywords: &["face", "sick", "fever"] },
    EmojiDef { character: "🤕", name: "face_with_head_bandage", keywords: &["face", "hurt", "injured"] },
    EmojiDef { character: "🤢", name: "nauseated_face", keywords: &["face", "sick", "gross", "green"] },
    EmojiDef { character: "🤮", name: "vomiting_face", keywords: &["face", "sick", "puke", "barf"] },
    EmojiDef { character: "🤧", name: "sneezing_face", keywords: &["face", "sick", "achoo", "tissue"] },
    EmojiDef { character: "🥵", name: "hot_face", keywords: &["face", "heat", "sweating", "summer"] },
    EmojiDef { character: "🥶", name: "cold_face", keywords: &["face", "freezing", "frozen", "winter"] },
    EmojiDef { character: "🥴", name: "woozy_face", keywords: &["face", "dizzy", "groggy", "tipsy"] },
    EmojiDef { character: "😵", name: "dizzy_face", keywords: &["face", "spent", "unconscious"] },
    EmojiDef { character: "🤯", name: "exploding_head", keywords: &["face", "shocked", "mind", "blown"] },
    EmojiDef { character: "🤠", name: "cowboy_hat_face", keywords: &["face", "western", "yeehaw"] },
    EmojiDef { character: "🥳", name: "partying_face", keywords: &["face", "party", "celebration", "birthday"] },
    EmojiDef { character: "🥺", name: "pleading_face", keywords: &["face", "puppy", "begging", "please"] },
    EmojiDef { character: "😳", name: "flushed", keywords: &["face", "embarrassed", "shocked", "shy"] },
    EmojiDef { character: "😞", name: "disappointed", keywords: &["face", "sad", "upset"] },
    EmojiDef { character: "😟", name: "worried", keywords: &["face", "concerned", "nervous"] },
    EmojiDef { character: "😕", name: "confused", keywords: &["face", "puzzled", "unsure"] },
    EmojiDef { character: "😠", name: "angry", keywords: &["face", "mad", "annoyed", "grumpy"] },
    EmojiDef { character: "😡", name: "rage", keywords: &["face", "angry", "mad", "furious"] },
    EmojiDef { character: "😢", name: "cry", keywords: &["face", "sad", "tear", "unhappy"] },
    EmojiDef { character: "😭", name: "sob", keywords: &["face", "cry", "sad", "tears"] },
    EmojiDef { character: "😱", name: "scream", keywords: &["face", "horror", "shocked", "scared"] },
    EmojiDef { character: "😨", name: "fearful", keywords: &["face", "scared", "terrified"] },
    EmojiDef { character: "😰", name: "cold_sweat", keywords: &["face", "nervous", "anxious"] },
    EmojiDef { character: "😲", name: "astonished", keywords: &["face", "amazed", "gasp", "wow"] },
    EmojiDef { character: "💀", name: "skull", keywords: &["dead", "death", "skeleton", "danger"] },
    EmojiDef { character: "💩", name: "poop", keywords: &["crap", "turd", "smelly"] },
    EmojiDef { character: "🤡", name: "clown_face", keywords: &["face", "joker", "circus"] },
    EmojiDef { character: "👻", name: "ghost", keywords: &["halloween", "spooky", "boo"] },
    EmojiDef { character: "👽", name: "alien", keywords: &["ufo", "space", "extraterrestrial"] },
    EmojiDef { character: "🤖", name: "robot", keywords: &["machine", "bot", "computer"] },
    // Gestures and body
    EmojiDef { character: "👋", name: "wave", keywords: &["hand", "hello", "goodbye", "greeting"] },
    EmojiDef { character: "🤚", name: "raised_back_of_hand", keywords: &["hand", "stop"] },
    EmojiDef { character: "✋", name: "raised_hand", keywords: &["hand", "stop", "high", "five"] },
    EmojiDef { character: "🖖", name: "vulcan_salute", keywords: &["hand", "spock", "prosper"] },
    EmojiDef { character: "👌", name: "ok_hand", keywords: &["hand", "okay", "perfect", "agree"] },
    EmojiDef { character: "✌️", name: "v", keywords: &["hand", "peace", "victory", "fingers"] },
    EmojiDef { character: "🤞", name: "crossed_fingers", keywords: &["hand", "luck", "hope", "promise"] },
    EmojiDef { character: "🤟", name: "love_you_gesture", keywords: &["hand", "fingers"] },
    EmojiDef { character: "🤘", name: "metal", keywords: &["hand", "rock", "horns", "concert"] },
    EmojiDef { character: "🤙", name: "call_me_hand", keywords: &["hand", "shaka", "phone"] },
    EmojiDef { character: "👈", name: "point_left", keywords: &["hand", "finger", "direction"] },
    EmojiDef { character: "👉", name: "point_right", keywords: &["hand", "finger", "direction"] },
    EmojiDef { character: "👆", name: "point_up", keywords: &["hand", "finger", "direction"] },
    EmojiDef { character: "👇", name: "point_down", keywords: &["hand", "finger", "direction"] },
    EmojiDef { character: "👍", name: "thumbsup", keywords: &["hand", "approve", "like", "yes"] },
    EmojiDef { character: "👎", name: "thumbsdown", keywords: &["hand", "disapprove", "dislike", "no"] },
    EmojiDef { character: "✊", name: "fist_raised", keywords: &["hand", "power", "solidarity"] },
    EmojiDef { character: "👊", name: "facepunch", keywords: &["hand", "fist", "bump", "punch"] },
    EmojiDef { character: "👏", name: "clap", keywords: &["hands", "applause", "bravo", "congrats"] },
    EmojiDef { character: "🙌", name: "raised_hands", keywords: &["hooray", "celebrate", "yay"] },
    EmojiDef { character: "👐", name: "open_hands", keywords: &["hug", "jazz"] },
    EmojiDef { character: "🤝", name: "handshake", keywords: &["agreement", "deal", "meeting"] },
    EmojiDef { character: "🙏", name: "pray", keywords: &["hands", "please", "hope", "thanks", "namaste"] },
    EmojiDef { character: "✍️", name: "writing_hand", keywords: &["pen", "write", "sign"] },
    EmojiDef { character: "💅", name: "nail_care", keywords: &["polish", "manicure", "sassy"] },
    EmojiDef { character: "💪", name: "muscle", keywords: &["arm", "flex", "strong", "biceps", "workout"] },
    EmojiDef { character: "👀", name: "eyes", keywords: &["look", "watch", "see", "observe"] },
    EmojiDef { character: "👂", name: "ear", keywords: &["hear", "listen", "sound"] },
    EmojiDef { character: "👃", name: "nose", keywords: &["smell", "sniff"] },
    EmojiDef { character: "👄", name: "lips", keywords: &["mouth", "kiss"] },
    EmojiDef { character: "👅", name: "tongue", keywords: &["taste", "lick"] },
    EmojiDef { character: "🧠", name: "brain", keywords: &["smart", "intelligent", "mind"] },
    EmojiDef { character: "💃", name: "dancer", keywords: &["dancing", "dress", "salsa", "fun"] },
    EmojiDef { character: "🕺", name: "man_dancing", keywords: &["dancing", "disco", "fun"] },
    EmojiDef { character: "🏃", name: "runner", keywords: &["running", "exercise", "marathon", "hurry"] },
    EmojiDef { character: "🚶", name: "walking", keywords: &["stroll", "pedestrian"] },
    // Hearts and love
    EmojiDef { character: "❤️", name: "heart", keywords: &["love", "like", "red", "valentines"] },
    EmojiDef { character: "🧡", name: "orange_heart", keywords: &["love", "like"] },
    EmojiDef { character: "💛", name: "yellow_heart", keywords: &["love", "like", "friendship"] },
    EmojiDef { character: "💚", name: "green_heart", keywords: &["love", "like", "nature"] },
    EmojiDef { character: "💙", name: "blue_heart", keywords: &["love", "like", "loyalty"] },
    EmojiDef { character: "💜", name: "purple_heart", keywords: &["love", "like"] },
    EmojiDef { character: "🖤", name: "black_heart", keywords: &["love", "dark", "evil"] },
    EmojiDef { character: "🤍", name: "white_heart", keywords: &["love", "pure"] },
    EmojiDef { character: "💔", name: "broken_heart", keywords: &["heartbreak", "sad", "breakup"] },
    EmojiDef { character: "💕", name: "two_hearts", keywords: &["love", "affection", "valentines"] },
    EmojiDef { character: "💞", name: "revolving_hearts", keywords: &["love", "affection"] },
    EmojiDef { character: "💓", name: "heartbeat", keywords: &["love", "pulse"] },
    EmojiDef { character: "💗", name: "heartpulse", keywords: &["love", "growing", "affection"] },
    EmojiDef { character: "💖", name: "sparkling_heart", keywords: &["love", "shiny", "affection"] },
    EmojiDef { character: "💘", name: "cupid", keywords: &["love", "arrow", "valentines"] },
    EmojiDef { character: "💝", name: "gift_heart", keywords: &["love", "present", "valentines"] },
    EmojiDef { character: "💌", name: "love_letter", keywords: &["email", "envelope", "affection"] },
    EmojiDef { character: "💋", name: "kiss", keywords: &["lips", "lipstick", "affection"] },
    // Animals and creatures
    EmojiDef { character: "🐶", name: "dog", keywords: &["animal", "puppy", "pet", "woof"] },
    EmojiDef { character: "🐱", name: "cat", keywords: &["animal", "meow", "pet"] },
    EmojiDef { character: "🐭", name: "mouse", keywords: &["animal", "rodent", "cheese"] },
    EmojiDef { character: "🐹", name: "hamster", keywords: &["animal", "pet", "rodent"] },
    EmojiDef { character: "🐰", name: "rabbit", keywords: &["animal", "bunny", "pet", "hop"] },
    EmojiDef { character: "🦊", name: "fox_face", keywords: &["animal", "clever", "sly"] },
    EmojiDef { character: "🐻", name: "bear", keywords: &["animal", "wild", "grizzly"] },
    EmojiDef { character: "🐼", name: "panda_face", keywords: &["animal", "bamboo", "china"] },
    EmojiDef { character: "🐨", name: "koala", keywords: &["animal", "australia"] },
    EmojiDef { character: "🐯", name: "tiger", keywords: &["animal", "stripes", "roar"] },
    EmojiDef { character: "🦁", name: "lion", keywords: &["animal", "king", "mane", "roar"] },
    EmojiDef { character: "🐮", name: "cow", keywords: &["animal", "moo", "milk", "farm"] },
    EmojiDef { character: "🐷", name: "pig", keywords: &["animal", "oink", "farm"] },
    EmojiDef { character: "🐸", name: "frog", keywords: &["animal", "toad", "ribbit", "croak"] },
    EmojiDef { character: "🐵", name: "monkey_face", keywords: &["animal", "ape", "banana"] },
    EmojiDef { character: "🙈", name: "see_no_evil", keywords: &["monkey", "blind", "ignore"] },
    EmojiDef { character: "🙉", name: "hear_no_evil", keywords: &["monkey", "deaf", "ignore"] },
    EmojiDef { character: "🙊", name: "speak_no_evil", keywords: &["monkey", "mute", "quiet"] },
    EmojiDef { character: "🐔", name: "chicken", keywords: &["animal", "hen", "cluck", "farm"] },
    EmojiDef { character: "🐧", name: "penguin", keywords: &["animal", "antarctica", "waddle"] },
    EmojiDef { character: "🐦", name: "bird", keywords: &["animal", "fly", "tweet", "chirp"] },
    EmojiDef { character: "🐤", name: "baby_chick", keywords: &["animal", "bird", "chicken"] },
    EmojiDef { character: "🦆", name: "duck", keywords: &["animal", "bird", "quack", "mallard"] },
    EmojiDef { character: "🦅", name: "eagle", keywords: &["animal", "bird", "america", "majestic"] },
    EmojiDef { character: "🦉", name: "owl", keywords: &["animal", "bird", "wise", "night"] },
    EmojiDef { character: "🦇", name: "bat", keywords: &["animal", "vampire", "night"] },
    EmojiDef { character: "🐺", name: "wolf", keywords: &["animal", "wild", "howl"] },
    EmojiDef { character: "🐗", name: "boar", keywords: &["animal", "wild", "tusk"] },
    EmojiDef { character: "🐴", name: "horse", keywords: &["animal", "pony", "farm"] },
    EmojiDef { character: "🦄", name: "unicorn", keywords: &["animal", "mythical", "horse", "magic"] },
    EmojiDef { character: "🐝", name: "honeybee", keywords: &["animal", "insect", "bee", "buzz"] },
    EmojiDef { character: "🐛", name: "bug", keywords: &["animal", "insect", "caterpillar", "worm"] },
    EmojiDef { character: "🦋", name: "butterfly", keywords: &["animal", "insect", "pretty", "wings"] },
    EmojiDef { character: "🐌", name: "snail", keywords: &["animal", "slow", "shell"] },
    EmojiDef { character: "🐞", name: "lady_beetle", keywords: &["animal", "insect", "ladybug"] },
    EmojiDef { character: "🐜", name: "ant", keywords: &["animal", "insect", "colony"] },
    EmojiDef { character: "🐢", name: "turtle", keywords: &["animal", "slow", "tortoise", "shell"] },
    EmojiDef { character: "🐍", name: "snake", keywords: &["animal", "serpent", "hiss", "python"] },
    EmojiDef { character: "🦎", name: "lizard", keywords: &["animal", "reptile", "gecko"] },
    EmojiDef { character: "🦂", name: "scorpion", keywords: &["animal", "sting", "desert"] },
    EmojiDef { character: "🦀", name: "crab", keywords: &["animal", "seafood", "pinch", "beach"] },
    EmojiDef { character: "🦑", name: "squid", keywords: &["animal", "sea", "tentacles"] },
    EmojiDef { character: "🐙", name: "octopus", keywords: &["animal", "sea", "tentacles"] },
    EmojiDef { character: "🦐", name: "shrimp", keywords: &["animal", "seafood", "prawn"] },
    EmojiDef { character: "🐠", name: "tropical_fish", keywords: &["animal", "sea", "aquarium"] },
    EmojiDef { character: "🐟", name: "fish", keywords: &["animal", "sea", "swim"] },
    EmojiDef { character: "🐬", name: "dolphin", keywords: &["animal", "sea", "flipper", "smart"] },
    EmojiDef { character: "🐳", name: "whale", keywords: &["animal", "sea", "ocean", "spout"] },
    EmojiDef { character: "🦈", name: "shark", keywords: &["animal", "sea", "fins", "jaws"] },
    EmojiDef { character: "🐊", name: "crocodile", keywords: &["animal", "alligator", "swamp"] },
    EmojiDef { character: "🐎", name: "racehorse", keywords: &["animal", "gallop", "speed", "horse"] },
    EmojiDef { character: "🐘", name: "elephant", keywords: &["animal", "trunk", "big"] },
    EmojiDef { character: "🦏", name: "rhinoceros", keywords: &["animal", "horn", "rhino"] },
    EmojiDef { character: "🐪", name: "camel", keywords: &["animal", "desert", "hump"] },
    EmojiDef { character: "🦒", name: "giraffe", keywords: &["animal", "tall", "neck", "spots"] },
    EmojiDef { character: "🐑", name: "sheep", keywords: &["animal", "wool", "baa", "farm"] },
    EmojiDef { character: "🐐", name: "goat", keywords: &["animal", "farm", "greatest"] },
    EmojiDef { character: "🦌", name: "deer", keywords: &["animal", "antlers", "forest"] },
    EmojiDef { character: "🐓", name: "rooster", keywords: &["animal", "bird", "crow", "farm"] },
    EmojiDef { character: "🦃", name: "turkey", keywords: &["animal", "bird", "thanksgiving"] },
    EmojiDef { character: "🕊️", name: "dove", keywords: &["animal", "bird", "peace"] },
    EmojiDef { character: "🐉", name: "dragon", keywords: &["mythical", "fire", "china"] },
    EmojiDef { character: "🦕", name: "sauropod", keywords: &["animal", "dinosaur", "extinct"] },
    EmojiDef { character: "🦖", name: "t_rex", keywords: &["animal", "dinosaur", "tyrannosaurus", "extinct"] },
    // Plants and nature
    EmojiDef { character: "💐", name: "bouquet", keywords: &["flowers", "gift", "spring"] },
    EmojiDef { character: "🌸", name: "cherry_blossom", keywords: &["flower", "spring", "sakura"] },
    EmojiDef { character: "🌹", name: "rose", keywords: &["flower", "romance", "valentines"] },
    EmojiDef { character: "🌺", name: "hibiscus", keywords: &["flower", "tropical", "hawaii"] },
    EmojiDef { character: "🌻", name: "sunflower", keywords: &["flower", "yellow", "summer"] },
    EmojiDef { character: "🌷", name: "tulip", keywords: &["flower", "spring", "holland"] },
    EmojiDef { character: "🌱", name: "seedling", keywords: &["plant", "sprout", "grow", "garden"] },
    EmojiDef { character: "🌲", name: "evergreen_tree", keywords: &["plant", "forest", "pine"] },
    EmojiDef { character: "🌳", name: "deciduous_tree", keywords: &["plant", "forest", "nature"] },
    EmojiDef { character: "🌴", name: "palm_tree", keywords: &["plant", "beach", "tropical", "vacation"] },
    EmojiDef { character: "🌵", name: "cactus", keywords: &["plant", "desert", "spiky"] },
    EmojiDef { character: "🍀", name: "four_leaf_clover", keywords: &["plant", "luck", "irish"] },
    EmojiDef { character: "🍁", name: "maple_leaf", keywords: &["plant", "canada", "autumn", "fall"] },
    EmojiDef { character: "🍃", name: "leaves", keywords: &["plant", "wind", "nature"] },
    EmojiDef { character: "🍄", name: "mushroom", keywords: &["plant", "fungus", "toadstool"] },
    EmojiDef { character: "🌍", name: "earth_africa", keywords: &["world", "globe", "planet", "international"] },
    EmojiDef { character: "🌕", name: "full_moon", keywords: &["night", "sky", "lunar"] },
    EmojiDef { character: "🌙", name: "crescent_moon", keywords: &["night", "sky", "sleep"] },
    EmojiDef { character: "⭐", name: "star", keywords: &["night", "sky", "favorite", "award"] },
    EmojiDef { character: "🌟", name: "star2", keywords: &["night", "sky", "glow", "shining"] },
    EmojiDef { character: "✨", name: "sparkles", keywords: &["stars", "shine", "magic", "glitter"] },
    EmojiDef { character: "⚡", name: "zap", keywords: &["lightning", "thunder", "electric", "fast"] },
    EmojiDef { character: "🔥", name: "fire", keywords: &["flame", "hot", "burn", "lit"] },
    EmojiDef { character: "💥", name: "boom", keywords: &["explosion", "collision", "bang"] },
    EmojiDef { character: "☄️", name: "comet", keywords: &["space", "meteor", "asteroid"] },
    EmojiDef { character: "☀️", name: "sunny", keywords: &["weather", "sun", "bright", "summer"] },
    EmojiDef { character: "⛅", name: "partly_sunny", keywords: &["weather", "cloud", "sun"] },
    EmojiDef { character: "☁️", name: "cloud", keywords: &["weather", "sky", "overcast"] },
    EmojiDef { character: "🌈", name: "rainbow", keywords: &["weather", "colorful", "pride", "happy"] },
    EmojiDef { character: "☔", name: "umbrella", keywords: &["weather", "rain", "wet"] },
    EmojiDef { character: "❄️", name: "snowflake", keywords: &["weather", "snow", "cold", "winter"] },
    EmojiDef { character: "⛄", name: "snowman", keywords: &["weather", "snow", "winter", "frosty"] },
    EmojiDef { character: "🌊", name: "ocean", keywords: &["water", "sea", "surf", "tide"] },
    EmojiDef { character: "💧", name: "droplet", keywords: &["water", "drip", "drop"] },
    // Food and drink
    EmojiDef { character: "🍏", name: "green_apple", keywords: &["fruit", "food", "sour"] },
    EmojiDef { character: "🍎", name: "apple", keywords: &["fruit", "food", "red", "healthy"] },
    EmojiDef { character: "🍐", name: "pear", keywords: &["fruit", "food"] },
    EmojiDef { character: "🍊", name: "tangerine", keywords: &["fruit", "food", "orange", "citrus"] },
    EmojiDef { character: "🍋", name: "lemon", keywords: &["fruit", "food", "sour", "citrus"] },
    EmojiDef { character: "🍌", name: "banana", keywords: &["fruit", "food", "monkey"] },
    EmojiDef { character: "🍉", name: "watermelon", keywords: &["fruit", "food", "summer", "picnic"] },
    EmojiDef { character: "🍇", name: "grapes", keywords: &["fruit", "food", "wine"] },
    EmojiDef { character: "🍓", name: "strawberry", keywords: &["fruit", "food", "berry", "sweet"] },
    EmojiDef { character: "🍒", name: "cherries", keywords: &["fruit", "food", "berry"] },
    EmojiDef { character: "🍑", name: "peach", keywords: &["fruit", "food", "butt"] },
    EmojiDef { character: "🍍", name: "pineapple", keywords: &["fruit", "food", "tropical"] },
    EmojiDef { character: "🥝", name: "kiwi_fruit", keywords: &["fruit", "food", "green"] },
    EmojiDef { character: "🥑", name: "avocado", keywords: &["fruit", "food", "toast", "guacamole"] },
    EmojiDef { character: "🍅", name: "tomato", keywords: &["fruit", "food", "vegetable", "salad"] },
    EmojiDef { character: "🍆", name: "eggplant", keywords: &["vegetable", "food", "aubergine"] },
    EmojiDef { character: "🥕", name: "carrot", keywords: &["vegetable", "food", "orange", "bunny"] },
    EmojiDef { character: "🌽", name: "corn", keywords: &["vegetable", "food", "maize", "cob"] },
    EmojiDef { character: "🌶️", name: "hot_pepper", keywords: &["vegetable", "food", "spicy", "chili"] },
    EmojiDef { character: "🥔", name: "potato", keywords: &["vegetable", "food", "starch"] },
    EmojiDef { character: "🥐", name: "croissant", keywords: &["food", "bread", "french", "breakfast"] },
    EmojiDef { character: "🍞", name: "bread", keywords: &["food", "loaf", "toast", "wheat"] },
    EmojiDef { character: "🥖", name: "baguette_bread", keywords: &["food", "french"] },
    EmojiDef { character: "🥨", name: "pretzel", keywords: &["food", "twisted", "snack"] },
    EmojiDef { character: "🧀", name: "cheese", keywords: &["food", "dairy", "wedge"] },
    EmojiDef { character: "🥚", name: "egg", keywords: &["food", "breakfast", "chicken"] },
    EmojiDef { character: "🍳", name: "fried_egg", keywords: &["food", "breakfast", "cooking", "skillet"] },
    EmojiDef { character: "🥓", name: "bacon", keywords: &["food", "breakfast", "pork"] },
    EmojiDef { character: "🥞", name: "pancakes", keywords: &["food", "breakfast", "syrup"] },
    EmojiDef { character: "🍗", name: "poultry_leg", keywords: &["food", "meat", "chicken", "drumstick"] },
    EmojiDef { character: "🍖", name: "meat_on_bone", keywords: &["food", "meat"] },
    EmojiDef { character: "🍔", name: "hamburger", keywords: &["food", "burger", "fast", "beef"] },
    EmojiDef { character: "🍟", name: "fries", keywords: &["food", "chips", "fast", "potato"] },
    EmojiDef { character: "🍕", name: "pizza", keywords: &["food", "slice", "cheese", "italian"] },
    EmojiDef { character: "🌭", name: "hotdog", keywords: &["food", "sausage", "frankfurter"] },
    EmojiDef { character: "🥪", name: "sandwich", keywords: &["food", "lunch", "bread"] },
    EmojiDef { character: "🌮", name: "taco", keywords: &["food", "mexican"] },
    EmojiDef { character: "🌯", name: "burrito", keywords: &["food", "mexican", "wrap"] },
    EmojiDef { character: "🥗", name: "green_salad", keywords: &["food", "healthy", "lettuce"] },
    EmojiDef { character: "🍝", name: "spaghetti", keywords: &["food", "pasta", "italian", "noodle"] },
    EmojiDef { character: "🍜", name: "ramen", keywords: &["food", "noodle", "soup", "japanese"] },
    EmojiDef { character: "🍲", name: "stew", keywords: &["food", "soup", "pot"] },
    EmojiDef { character: "🍛", name: "curry", keywords: &["food", "rice", "spicy", "indian"] },
    EmojiDef { character: "🍣", name: "sushi", keywords: &["food", "fish", "japanese", "rice"] },
    EmojiDef { character: "🍱", name: "bento", keywords: &["food", "box", "japanese", "lunch"] },
    EmojiDef { character: "🍤", name: "fried_shrimp", keywords: &["food", "tempura", "seafood"] },
    EmojiDef { character: "🍙", name: "rice_ball", keywords: &["food", "japanese", "onigiri"] },
    EmojiDef { character: "🍚", name: "rice", keywords: &["food", "bowl", "grain"] },
    EmojiDef { character: "🍡", name: "dango", keywords: &["food", "japanese", "dumpling", "sweet"] },
    EmojiDef { character: "🍦", name: "icecream", keywords: &["food", "dessert", "soft", "cone"] },
    EmojiDef { character: "🍰", name: "cake", keywords: &["food", "dessert", "slice", "sweet"] },
    EmojiDef { character: "🎂", name: "birthday", keywords: &["food", "cake", "party", "candles"] },
    EmojiDef { character: "🍭", name: "lollipop", keywords: &["food", "candy", "sweet"] },
    EmojiDef { character: "🍬", name: "candy", keywords: &["food", "sweet", "sugar"] },
    EmojiDef { character: "🍫", name: "chocolate_bar", keywords: &["food", "sweet", "cocoa", "dessert"] },
    EmojiDef { character: "🍿", name: "popcorn", keywords: &["food", "movie", "snack", "theater"] },
    EmojiDef { character: "🍩", name: "doughnut", keywords: &["food", "donut", "sweet", "snack"] },
    EmojiDef { character: "🍪", name: "cookie", keywords: &["food", "sweet", "biscuit", "chocolate"] },
    EmojiDef { character: "🥜", name: "peanuts", keywords: &["food", "nut", "snack"] },
    EmojiDef { character: "🍯", name: "honey_pot", keywords: &["food", "sweet", "bees", "kiss"] },
    EmojiDef { character: "🥛", name: "milk_glass", keywords: &["drink", "dairy", "glass"] },
    EmojiDef { character: "☕", name: "coffee", keywords: &["drink", "caffeine", "espresso", "morning"] },
    EmojiDef { character: "🍵", name: "tea", keywords: &["drink", "green", "cup", "matcha"] },
    EmojiDef { character: "🍶", name: "sake", keywords: &["drink", "japanese", "alcohol"] },
    EmojiDef { character: "🍺", name: "beer", keywords: &["drink", "alcohol", "pint", "pub"] },
    EmojiDef { character: "🍻", name: "beers", keywords: &["drink", "alcohol", "cheers", "toast"] },
    EmojiDef { character: "🥂", name: "clinking_glasses", keywords: &["drink", "celebrate", "cheers", "toast"] },
    EmojiDef { character: "🍷", name: "wine_glass", keywords: &["drink", "alcohol", "grapes"] },
    EmojiDef { character: "🥃", name: "tumbler_glass", keywords: &["drink", "whisky", "bourbon"] },
    EmojiDef { character: "🍸", name: "cocktail", keywords: &["drink", "alcohol", "martini", "bar"] },
    EmojiDef { character: "🍹", name: "tropical_drink", keywords: &["drink", "alcohol", "beach", "vacation"] },
    EmojiDef { character: "🍾", name: "champagne", keywords: &["drink", "bottle", "celebrate", "pop"] },
    EmojiDef { character: "🍴", name: "fork_and_knife", keywords: &["cutlery", "eat", "restaurant"] },
    // Activities and events
    EmojiDef { character: "⚽", name: "soccer", keywords: &["sports", "football", "ball"] },
    EmojiDef { character: "🏀", name: "basketball", keywords: &["sports", "ball", "hoop", "nba"] },
    EmojiDef { character: "🏈", name: "football", keywords: &["sports", "ball", "american", "nfl"] },
    EmojiDef { character: "⚾", name: "baseball", keywords: &["sports", "ball"] },
    EmojiDef { character: "🎾", name: "tennis", keywords: &["sports", "ball", "racquet"] },
    EmojiDef { character: "🏐", name: "volleyball", keywords: &["sports", "ball", "beach"] },
    EmojiDef { character: "🏉", name: "rugby_football", keywords: &["sports", "ball"] },
    EmojiDef { character: "🎱", name: "8ball", keywords: &["sports", "pool", "billiards"] },
    EmojiDef { character: "🏓", name: "ping_pong", keywords: &["sports", "table", "tennis", "paddle"] },
    EmojiDef { character: "🏸", name: "badminton", keywords: &["sports", "racquet", "shuttlecock"] },
    EmojiDef { character: "⛳", name: "golf", keywords: &["sports", "flag", "hole", "putt"] },
    EmojiDef { character: "🎣", name: "fishing_pole_and_fish", keywords: &["sports", "hobby", "catch"] },
    EmojiDef { character: "🥊", name: "boxing_glove", keywords: &["sports", "fight", "punch"] },
    EmojiDef { character: "🎿", name: "ski", keywords: &["sports", "winter", "snow", "slope"] },
    EmojiDef { character: "🛷", name: "sled", keywords: &["winter", "snow", "sleigh", "toboggan"] },
    EmojiDef { character: "🎯", name: "dart", keywords: &["target", "bullseye", "aim", "goal"] },
    EmojiDef { character: "🎮", name: "video_game", keywords: &["play", "controller", "console", "gaming"] },
    EmojiDef { character: "🎲", name: "game_die", keywords: &["dice", "random", "board", "gamble"] },
    EmojiDef { character: "🎳", name: "bowling", keywords: &["sports", "pins", "strike"] },
    EmojiDef { character: "🎭", name: "performing_arts", keywords: &["theater", "drama", "masks", "acting"] },
    EmojiDef { character: "🎨", name: "art", keywords: &["design", "paint", "palette", "creative"] },
    EmojiDef { character: "🎬", name: "clapper", keywords: &["film", "movie", "cinema", "action"] },
    EmojiDef { character: "🎤", name: "microphone", keywords: &["sing", "karaoke", "voice", "stage"] },
    EmojiDef { character: "🎧", name: "headphones", keywords: &["music", "listen", "audio", "sound"] },
    EmojiDef { character: "🎼", name: "musical_score", keywords: &["music", "clef", "compose"] },
    EmojiDef { character: "🎹", name: "musical_keyboard", keywords: &["music", "piano", "instrument"] },
    EmojiDef { character: "🥁", name: "drum", keywords: &["music", "instrument", "beat", "drumsticks"] },
    EmojiDef { character: "🎷", name: "saxophone", keywords: &["music", "instrument", "jazz"] },
    EmojiDef { character: "🎺", name: "trumpet", keywords: &["music", "instrument", "brass"] },
    EmojiDef { character: "🎸", name: "guitar", keywords: &["music", "instrument", "rock", "strings"] },
    EmojiDef { character: "🎻", name: "violin", keywords: &["music", "instrument", "orchestra", "strings"] },
    EmojiDef { character: "🎵", name: "musical_note", keywords: &["music", "melody", "song", "tune"] },
    EmojiDef { character: "🎶", name: "notes", keywords: &["music", "melody", "singing"] },
    EmojiDef { character: "🎪", name: "circus_tent", keywords: &["carnival", "party", "big", "top"] },
    EmojiDef { character: "🎠", name: "carousel_horse", keywords: &["carnival", "ride", "fair", "horse"] },
    EmojiDef { character: "🎡", name: "ferris_wheel", keywords: &["carnival", "ride", "fair"] },
    EmojiDef { character: "🎢", name: "roller_coaster", keywords: &["carnival", "ride", "fun", "playground"] },
    EmojiDef { character: "🏆", name: "trophy", keywords: &["win", "award", "champion", "contest"] },
    EmojiDef { character: "🥇", name: "1st_place_medal", keywords: &["win", "gold", "first", "award"] },
    EmojiDef { character: "🏅", name: "medal_sports", keywords: &["win", "award", "winning"] },
    EmojiDef { character: "🎁", name: "gift", keywords: &["present", "birthday", "christmas", "wrapped"] },
    EmojiDef { character: "🎈", name: "balloon", keywords: &["party", "birthday", "celebrate", "float"] },
    EmojiDef { character: "🎀", name: "ribbon", keywords: &["bow", "decoration", "wrap", "cute"] },
    EmojiDef { character: "🎊", name: "confetti_ball", keywords: &["party", "celebrate", "congratulations"] },
    EmojiDef { character: "🎉", name: "tada", keywords: &["party", "celebrate", "congratulations", "hooray"] },
    EmojiDef { character: "🎆", name: "fireworks", keywords: &["party", "celebrate", "festival", "sparkle"] },
    EmojiDef { character: "🎇", name: "sparkler", keywords: &["party", "celebrate", "shine"] },
    // Travel and places
    EmojiDef { character: "🚗", name: "car", keywords: &["vehicle", "drive", "automobile", "red"] },
    EmojiDef { character: "🚕", name: "taxi", keywords: &["vehicle", "cab", "uber", "yellow"] },
    EmojiDef { character: "🚌", name: "bus", keywords: &["vehicle", "transport", "school"] },
    EmojiDef { character: "🚓", name: "police_car", keywords: &["vehicle", "cops", "law"] },
    EmojiDef { character: "🚑", name: "ambulance", keywords: &["vehicle", "emergency", "hospital"] },
    EmojiDef { character: "🚒", name: "fire_engine", keywords: &["vehicle", "emergency", "firefighter"] },
    EmojiDef { character: "🚚", name: "truck", keywords: &["vehicle", "delivery", "cargo"] },
    EmojiDef { character: "🚜", name: "tractor", keywords: &["vehicle", "farm", "agriculture"] },
    EmojiDef { character: "🛴", name: "kick_scooter", keywords: &["vehicle", "ride", "razor"] },
    EmojiDef { character: "🚲", name: "bike", keywords: &["vehicle", "bicycle", "cycling", "pedal"] },
    EmojiDef { character: "🚨", name: "rotating_light", keywords: &["police", "emergency", "alert", "siren"] },
    EmojiDef { character: "🚂", name: "steam_locomotive", keywords: &["vehicle", "train", "railway"] },
    EmojiDef { character: "🚇", name: "metro", keywords: &["vehicle", "subway", "underground", "transport"] },
    EmojiDef { character: "✈️", name: "airplane", keywords: &["vehicle", "flight", "fly", "travel"] },
    EmojiDef { character: "🚀", name: "rocket", keywords: &["space", "launch", "ship", "fast", "nasa"] },
    EmojiDef { character: "🛸", name: "flying_saucer", keywords: &["space", "ufo", "alien"] },
    EmojiDef { character: "🚁", name: "helicopter", keywords: &["vehicle", "fly", "chopper"] },
    EmojiDef { character: "⛵", name: "boat", keywords: &["vehicle", "sailing", "sea", "yacht"] },
    EmojiDef { character: "🚤", name: "speedboat", keywords: &["vehicle", "sea", "summer"] },
    EmojiDef { character: "⚓", name: "anchor", keywords: &["ship", "sea", "boat", "harbor"] },
    EmojiDef { character: "🚢", name: "ship", keywords: &["vehicle", "sea", "cruise", "titanic"] },
    EmojiDef { character: "⛽", name: "fuelpump", keywords: &["gas", "station", "petrol"] },
    EmojiDef { character: "🚧", name: "construction", keywords: &["barrier", "caution", "wip"] },
    EmojiDef { character: "🚦", name: "vertical_traffic_light", keywords: &["signal", "driving", "intersection"] },
    EmojiDef { character: "🗿", name: "moyai", keywords: &["statue", "easter", "island", "rock"] },
    EmojiDef { character: "🗽", name: "statue_of_liberty", keywords: &["newyork", "america", "landmark"] },
    EmojiDef { character: "🗼", name: "tokyo_tower", keywords: &["japan", "landmark"] },
    EmojiDef { character: "🏰", name: "european_castle", keywords: &["building", "royalty", "fairytale"] },
    EmojiDef { character: "🏯", name: "japanese_castle", keywords: &["building", "japan", "fortress"] },
    EmojiDef { character: "🗻", name: "mount_fuji", keywords: &["mountain", "japan", "volcano"] },
    EmojiDef { character: "⛺", name: "tent", keywords: &["camping", "outdoors", "shelter"] },
    EmojiDef { character: "🏠", name: "house", keywords: &["building", "home", "live"] },
    EmojiDef { character: "🏡", name: "house_with_garden", keywords: &["building", "home", "yard"] },
    EmojiDef { character: "🏢", name: "office", keywords: &["building", "work", "city", "bureau"] },
    EmojiDef { character: "🏥", name: "hospital", keywords: &["building", "health", "doctor", "medical"] },
    EmojiDef { character: "🏦", name: "bank", keywords: &["building", "money", "finance"] },
    EmojiDef { character: "🏨", name: "hotel", keywords: &["building", "accommodation", "stay"] },
    EmojiDef { character: "🏪", name: "convenience_store", keywords: &["building", "shopping", "groceries"] },
    EmojiDef { character: "🏫", name: "school", keywords: &["building", "education", "learn", "student"] },
    EmojiDef { character: "⛪", name: "church", keywords: &["building", "religion", "christ", "wedding"] },
    EmojiDef { character: "🕌", name: "mosque", keywords: &["building", "islam", "worship"] },
    EmojiDef { character: "🌃", name: "night_with_stars", keywords: &["city", "evening", "downtown"] },
    EmojiDef { character: "🌉", name: "bridge_at_night", keywords: &["city", "sanfrancisco", "landmark"] },
    // Objects
    EmojiDef { character: "⌚", name: "watch", keywords: &["time", "wrist", "accessory"] },
    EmojiDef { character: "📱", name: "iphone", keywords: &["phone", "smartphone", "mobile", "technology"] },
    EmojiDef { character: "💻", name: "computer", keywords: &["laptop", "technology", "screen", "work"] },
    EmojiDef { character: "⌨️", name: "keyboard", keywords: &["computer", "type", "input"] },
    EmojiDef { character: "🖥️", name: "desktop_computer", keywords: &["technology", "monitor", "screen"] },
    EmojiDef { character: "🖨️", name: "printer", keywords: &["paper", "ink", "office"] },
    EmojiDef { character: "💾", name: "floppy_disk", keywords: &["save", "computer", "disk", "retro"] },
    EmojiDef { character: "💿", name: "cd", keywords: &["disk", "disc", "music", "dvd"] },
    EmojiDef { character: "📷", name: "camera", keywords: &["photo", "picture", "snapshot"] },
    EmojiDef { character: "📹", name: "video_camera", keywords: &["film", "record", "camcorder"] },
    EmojiDef { character: "🎥", name: "movie_camera", keywords: &["film", "record", "cinema"] },
    EmojiDef { character: "📺", name: "tv", keywords: &["television", "watch", "show", "screen"] },
    EmojiDef { character: "📻", name: "radio", keywords: &["music", "broadcast", "podcast"] },
    EmojiDef { character: "☎️", name: "phone", keywords: &["telephone", "call", "dial", "retro"] },
    EmojiDef { character: "📞", name: "telephone_receiver", keywords: &["call", "phone", "voip"] },
    EmojiDef { character: "⏰", name: "alarm_clock", keywords: &["time", "wake", "morning", "ring"] },
    EmojiDef { character: "⏱️", name: "stopwatch", keywords: &["time", "timer", "deadline"] },
    EmojiDef { character: "⌛", name: "hourglass", keywords: &["time", "sand", "clock", "waiting"] },
    EmojiDef { character: "🔋", name: "battery", keywords: &["power", "energy", "charge"] },
    EmojiDef { character: "🔌", name: "electric_plug", keywords: &["power", "charger", "socket"] },
    EmojiDef { character: "💡", name: "bulb", keywords: &["light", "idea", "electricity", "bright"] },
    EmojiDef { character: "🔦", name: "flashlight", keywords: &["light", "dark", "night", "torch"] },
    EmojiDef { character: "🕯️", name: "candle", keywords: &["light", "wax", "flame"] },
    EmojiDef { character: "🗑️", name: "wastebasket", keywords: &["trash", "garbage", "bin", "delete"] },
    EmojiDef { character: "💰", name: "moneybag", keywords: &["money", "dollar", "rich", "payment"] },
    EmojiDef { character: "💵", name: "dollar", keywords: &["money", "bill", "currency", "cash"] },
    EmojiDef { character: "💴", name: "yen", keywords: &["money", "bill", "currency", "japan"] },
    EmojiDef { character: "💶", name: "euro", keywords: &["money", "bill", "currency", "europe"] },
    EmojiDef { character: "💷", name: "pound", keywords: &["money", "bill", "currency", "britain"] },
    EmojiDef { character: "💸", name: "money_with_wings", keywords: &["money", "spend", "lose", "fly"] },
    EmojiDef { character: "💳", name: "credit_card", keywords: &["money", "pay", "bank", "purchase"] },
    EmojiDef { character: "💎", name: "gem", keywords: &["diamond", "jewel", "precious", "ring"] },
    EmojiDef { character: "🔧", name: "wrench", keywords: &["tool", "fix", "repair", "spanner"] },
    EmojiDef { character: "🔨", name: "hammer", keywords: &["tool", "build", "nail", "handy"] },
    EmojiDef { character: "🔩", name: "nut_and_bolt", keywords: &["tool", "fix", "screw"] },
    EmojiDef { character: "⚙️", name: "gear", keywords: &["cog", "settings", "machine", "engineering"] },
    EmojiDef { character: "🔫", name: "gun", keywords: &["weapon", "pistol", "shoot"] },
    EmojiDef { character: "💣", name: "bomb", keywords: &["weapon", "explosive", "boom"] },
    EmojiDef { character: "🔪", name: "hocho", keywords: &["knife", "blade", "cut", "kitchen"] },
    EmojiDef { character: "⚔️", name: "crossed_swords", keywords: &["weapon", "battle", "duel", "war"] },
    EmojiDef { character: "🛡️", name: "shield", keywords: &["protection", "defense", "security"] },
    EmojiDef { character: "🚬", name: "smoking", keywords: &["cigarette", "tobacco", "kills"] },
    EmojiDef { character: "🔮", name: "crystal_ball", keywords: &["fortune", "magic", "future", "mystic"] },
    EmojiDef { character: "💈", name: "barber", keywords: &["haircut", "salon", "pole"] },
    EmojiDef { character: "🔭", name: "telescope", keywords: &["space", "stars", "astronomy", "observe"] },
    EmojiDef { character: "🔬", name: "microscope", keywords: &["science", "laboratory", "research", "zoom"] },
    EmojiDef { character: "💊", name: "pill", keywords: &["medicine", "health", "drug", "doctor"] },
    EmojiDef { character: "💉", name: "syringe", keywords: &["medicine", "health", "needle", "vaccine"] },
    EmojiDef { character: "🌡️", name: "thermometer", keywords: &["temperature", "fever", "weather"] },
    EmojiDef { character: "🚽", name: "toilet", keywords: &["bathroom", "restroom", "wc"] },
    EmojiDef { character: "🚿", name: "shower", keywords: &["bathroom", "clean", "water"] },
    EmojiDef { character: "🛁", name: "bathtub", keywords: &["bathroom", "clean", "bath"] },
    EmojiDef { character: "🔑", name: "key", keywords: &["lock", "door", "password", "secret"] },
    EmojiDef { character: "🚪", name: "door", keywords: &["entry", "exit", "house"] },
    EmojiDef { character: "🛏️", name: "bed", keywords: &["sleep", "rest", "bedroom"] },
    EmojiDef { character: "🛒", name: "shopping_cart", keywords: &["trolley", "store", "buy"] },
    EmojiDef { character: "✉️", name: "envelope", keywords: &["mail", "letter", "post"] },
    EmojiDef { character: "📧", name: "email", keywords: &["mail", "letter", "inbox", "message"] },
    EmojiDef { character: "📤", name: "outbox_tray", keywords: &["mail", "send", "outgoing"] },
    EmojiDef { character: "📥", name: "inbox_tray", keywords: &["mail", "receive", "incoming"] },
    EmojiDef { character: "📦", name: "package", keywords: &["box", "delivery", "shipping", "parcel"] },
    EmojiDef { character: "📫", name: "mailbox", keywords: &["mail", "post", "letterbox"] },
    EmojiDef { character: "📜", name: "scroll", keywords: &["paper", "document", "ancient"] },
    EmojiDef { character: "📄", name: "page_facing_up", keywords: &["paper", "document", "file"] },
    EmojiDef { character: "📊", name: "bar_chart", keywords: &["graph", "statistics", "data", "presentation"] },
    EmojiDef { character: "📈", name: "chart_with_upwards_trend", keywords: &["graph", "growth", "increase", "stocks"] },
    EmojiDef { character: "📉", name: "chart_with_downwards_trend", keywords: &["graph", "decline", "decrease", "loss"] },
    EmojiDef { character: "📆", name: "calendar", keywords: &["date", "schedule", "planning"] },
    EmojiDef { character: "📅", name: "date", keywords: &["calendar", "schedule", "day"] },
    EmojiDef { character: "📋", name: "clipboard", keywords: &["paper", "copy", "list", "form"] },
    EmojiDef { character: "📁", name: "file_folder", keywords: &["directory", "documents", "storage"] },
    EmojiDef { character: "📂", name: "open_file_folder", keywords: &["directory", "documents", "open"] },
    EmojiDef { character: "🗂️", name: "card_index_dividers", keywords: &["organizing", "business", "category"] },
    EmojiDef { character: "📰", name: "newspaper", keywords: &["press", "headline", "journalism"] },
    EmojiDef { character: "📓", name: "notebook", keywords: &["paper", "notes", "journal"] },
    EmojiDef { character: "📖", name: "book", keywords: &["read", "library", "literature", "open"] },
    EmojiDef { character: "📚", name: "books", keywords: &["read", "library", "study", "literature"] },
    EmojiDef { character: "🔖", name: "bookmark", keywords: &["save", "label", "favorite"] },
    EmojiDef { character: "🔗", name: "link", keywords: &["chain", "url", "connect"] },
    EmojiDef { character: "📎", name: "paperclip", keywords: &["attachment", "documents", "stationery"] },
    EmojiDef { character: "📏", name: "straight_ruler", keywords: &["measure", "length", "stationery"] },
    EmojiDef { character: "📌", name: "pushpin", keywords: &["pin", "mark", "here", "stationery"] },
    EmojiDef { character: "📍", name: "round_pushpin", keywords: &["pin", "location", "map", "here"] },
    EmojiDef { character: "✂️", name: "scissors", keywords: &["cut", "stationery", "snip"] },
    EmojiDef { character: "🖌️", name: "paintbrush", keywords: &["art", "drawing", "creative"] },
    EmojiDef { character: "🖍️", name: "crayon", keywords: &["art", "drawing", "children"] },
    EmojiDef { character: "📝", name: "memo", keywords: &["note", "paper", "write", "documents"] },
    EmojiDef { character: "✏️", name: "pencil2", keywords: &["write", "paper", "stationery", "school"] },
    EmojiDef { character: "🔍", name: "mag", keywords: &["search", "magnifying", "zoom", "find"] },
    EmojiDef { character: "🔒", name: "lock", keywords: &["security", "password", "private", "closed"] },
    EmojiDef { character: "🔓", name: "unlock", keywords: &["security", "open", "privacy"] },
    EmojiDef { character: "👑", name: "crown", keywords: &["king", "queen", "royal", "leader"] },
    // Symbols
    EmojiDef { character: "💯", name: "100", keywords: &["score", "perfect", "percent", "keepit"] },
    EmojiDef { character: "💤", name: "zzz", keywords: &["sleep", "tired", "dream", "snore"] },
    EmojiDef { character: "💦", name: "sweat_drops", keywords: &["water", "drip", "splash", "workout"] },
    EmojiDef { character: "💨", name: "dash", keywords: &["wind", "fast", "blow", "smoke"] },
    EmojiDef { character: "💫", name: "dizzy", keywords: &["star", "sparkle", "shoot", "magic"] },
    EmojiDef { character: "💬", name: "speech_balloon", keywords: &["bubble", "words", "talk", "chat"] },
    EmojiDef { character: "💭", name: "thought_balloon", keywords: &["bubble", "thinking", "dream"] },
    EmojiDef { character: "❗", name: "exclamation", keywords: &["mark", "surprise", "important", "wow"] },
    EmojiDef { character: "❓", name: "question", keywords: &["mark", "confused", "doubt", "what"] },
    EmojiDef { character: "✅", name: "white_check_mark", keywords: &["done", "yes", "approved", "complete"] },
    EmojiDef { character: "✔️", name: "heavy_check_mark", keywords: &["done", "yes", "tick", "approved"] },
    EmojiDef { character: "❌", name: "x", keywords: &["no", "delete", "wrong", "cancel", "cross"] },
    EmojiDef { character: "➕", name: "heavy_plus_sign", keywords: &["math", "add", "increase", "more"] },
    EmojiDef { character: "⚠️", name: "warning", keywords: &["caution", "alert", "danger", "attention"] },
    EmojiDef { character: "⛔", name: "no_entry", keywords: &["stop", "limit", "denied", "restricted"] },
    EmojiDef { character: "🚫", name: "no_entry_sign", keywords: &["stop", "forbidden", "prohibited", "banned"] },
    EmojiDef { character: "♻️", name: "recycle", keywords: &["environment", "green", "arrows", "trash"] },
    EmojiDef { character: "🔄", name: "arrows_counterclockwise", keywords: &["sync", "refresh", "repeat", "reload"] },
    EmojiDef { character: "⬆️", name: "arrow_up", keywords: &["direction", "above", "north"] },
    EmojiDef { character: "⬇️", name: "arrow_down", keywords: &["direction", "below", "south"] },
    EmojiDef { character: "⬅️", name: "arrow_left", keywords: &["direction", "previous", "west"] },
    EmojiDef { character: "➡️", name: "arrow_right", keywords: &["direction", "next", "east"] },
    EmojiDef { character: "♾️", name: "infinity", keywords: &["forever", "unbounded", "endless"] },
    EmojiDef { character: "🔔", name: "bell", keywords: &["sound", "notification", "chime", "ring"] },
    EmojiDef { character: "🔕", name: "no_bell", keywords: &["sound", "mute", "silent", "quiet"] },
    EmojiDef { character: "🏁", name: "checkered_flag", keywords: &["race", "finish", "win", "milestone"] },
    EmojiDef { character: "🚩", name: "triangular_flag_on_post", keywords: &["mark", "milestone", "red", "flag"] },
    EmojiDef { character: "🎌", name: "crossed_flags", keywords: &["japan", "nation", "celebration"] },
    EmojiDef { character: "🏳️‍🌈", name: "rainbow_flag", keywords: &["pride", "lgbt", "flag"] },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn characters_are_unique() {
        let mut seen = HashSet::new();
        for def in LEXICON {
            assert!(
                seen.insert(def.character),
                "duplicate lexicon character: {} ({})",
                def.character,
                def.name
            );
        }
    }

    #[test]
    fn names_and_keywords_are_normalized() {
        // Queries are lowercased before matching, so every searchable field
        // has to be lowercase and whitespace-free already.
        for def in LEXICON {
            for field in std::iter::once(def.name).chain(def.keywords.iter().copied()) {
                assert!(!field.is_empty(), "empty field on {}", def.character);
                assert_eq!(field, field.to_lowercase(), "{field:?} is not lowercase");
                assert!(
                    !field.contains(char::is_whitespace),
                    "{field:?} contains whitespace"
                );
            }
        }
    }

    #[test]
    fn every_record_has_keywords() {
        for def in LEXICON {
            assert!(!def.keywords.is_empty(), "{} has no keywords", def.name);
        }
    }
}
