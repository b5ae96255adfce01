//! Static character metadata table.
//!
//! The table is immutable and declared in a fixed order. The prediction
//! endpoint's probability vector is aligned to this order: index *i*
//! corresponds to the *i*-th record below. Reordering entries breaks the
//! chart labels.

#[cfg(test)]
#[path = "characters_test.rs"]
mod characters_test;

/// Static display metadata for a known character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterRecord {
    /// Class identifier as reported by the prediction endpoint.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Bounty as a display string, e.g. "3,000,000,000 Berries".
    pub bounty: &'static str,
    pub crew: &'static str,
    /// Devil-fruit name, or "None".
    pub fruit: &'static str,
    pub image: &'static str,
}

/// Image shown when a predicted identifier has no record.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/120x120/95a5a6/ffffff?text=?";

/// All known characters, in classifier class order.
pub const CHARACTERS: &[CharacterRecord] = &[
    CharacterRecord {
        id: "Luffy",
        name: "Monkey D. Luffy",
        description: "Captain of the Straw Hat Pirates and wielder of the Gomu Gomu no Mi (Gum-Gum Fruit).",
        bounty: "3,000,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "Gomu Gomu no Mi",
        image: "/characters/Luffy",
    },
    CharacterRecord {
        id: "Zoro",
        name: "Roronoa Zoro",
        description: "Swordsman of the Straw Hat Pirates and one of the strongest swordsmen in the world.",
        bounty: "1,111,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Zoro",
    },
    CharacterRecord {
        id: "Nami",
        name: "Nami",
        description: "Navigator of the Straw Hat Pirates and expert cartographer.",
        bounty: "366,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Nami",
    },
    CharacterRecord {
        id: "Usopp",
        name: "Usopp",
        description: "Sniper of the Straw Hat Pirates and a skilled marksman.",
        bounty: "500,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Usopp",
    },
    CharacterRecord {
        id: "Sanji",
        name: "Vinsmoke Sanji",
        description: "Cook of the Straw Hat Pirates and expert in Black Leg Style.",
        bounty: "1,032,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Sanji",
    },
    CharacterRecord {
        id: "Chopper",
        name: "Tony Tony Chopper",
        description: "Doctor of the Straw Hat Pirates and wielder of the Hito Hito no Mi.",
        bounty: "1,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "Hito Hito no Mi",
        image: "/characters/Chopper",
    },
    CharacterRecord {
        id: "Robin",
        name: "Nico Robin",
        description: "Archaeologist of the Straw Hat Pirates and wielder of the Hana Hana no Mi.",
        bounty: "930,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "Hana Hana no Mi",
        image: "/characters/Robin",
    },
    CharacterRecord {
        id: "Franky",
        name: "Franky",
        description: "Shipwright of the Straw Hat Pirates and a cyborg.",
        bounty: "394,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Franky",
    },
    CharacterRecord {
        id: "Brook",
        name: "Brook",
        description: "Musician of the Straw Hat Pirates and wielder of the Yomi Yomi no Mi.",
        bounty: "383,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "Yomi Yomi no Mi",
        image: "/characters/Brook",
    },
    CharacterRecord {
        id: "Jinbe",
        name: "Jinbe",
        description: "Helmsman of the Straw Hat Pirates and former Warlord of the Sea.",
        bounty: "1,100,000,000 Berries",
        crew: "Straw Hat Pirates",
        fruit: "None",
        image: "/characters/Jinbe",
    },
    CharacterRecord {
        id: "Shanks",
        name: "Red-Haired Shanks",
        description: "Captain of the Red Hair Pirates and one of the Four Emperors.",
        bounty: "4,048,900,000 Berries",
        crew: "Red Hair Pirates",
        fruit: "None",
        image: "https://via.placeholder.com/120x120/ff3838/ffffff?text=Shanks",
    },
    CharacterRecord {
        id: "Ace",
        name: "Portgas D. Ace",
        description: "Former commander of the Whitebeard Pirates and wielder of the Mera Mera no Mi.",
        bounty: "550,000,000 Berries",
        crew: "Whitebeard Pirates",
        fruit: "Mera Mera no Mi",
        image: "https://via.placeholder.com/120x120/ff9f43/ffffff?text=Ace",
    },
    CharacterRecord {
        id: "Law",
        name: "Trafalgar Law",
        description: "Captain of the Heart Pirates and wielder of the Ope Ope no Mi.",
        bounty: "3,000,000,000 Berries",
        crew: "Heart Pirates",
        fruit: "Ope Ope no Mi",
        image: "https://via.placeholder.com/120x120/00d2d3/ffffff?text=Law",
    },
    CharacterRecord {
        id: "Kid",
        name: "Eustass Kid",
        description: "Captain of the Kid Pirates and wielder of the Jiki Jiki no Mi.",
        bounty: "3,000,000,000 Berries",
        crew: "Kid Pirates",
        fruit: "Jiki Jiki no Mi",
        image: "https://via.placeholder.com/120x120/ff6b6b/ffffff?text=Kid",
    },
    CharacterRecord {
        id: "Dragon",
        name: "Monkey D. Dragon",
        description: "Leader of the Revolutionary Army and father of Luffy.",
        bounty: "Unknown",
        crew: "Revolutionary Army",
        fruit: "Unknown",
        image: "https://via.placeholder.com/120x120/2c3e50/ffffff?text=Dragon",
    },
    CharacterRecord {
        id: "Whitebeard",
        name: "Edward Newgate",
        description: "Former captain of the Whitebeard Pirates and one of the strongest pirates.",
        bounty: "5,564,800,000 Berries",
        crew: "Whitebeard Pirates",
        fruit: "Gura Gura no Mi",
        image: "https://via.placeholder.com/120x120/34495e/ffffff?text=Whitebeard",
    },
    CharacterRecord {
        id: "Roger",
        name: "Gol D. Roger",
        description: "Former Pirate King and captain of the Roger Pirates.",
        bounty: "5,564,800,000 Berries",
        crew: "Roger Pirates",
        fruit: "Unknown",
        image: "https://via.placeholder.com/120x120/e74c3c/ffffff?text=Roger",
    },
];

/// Look up a character record by its class identifier.
pub fn lookup(id: &str) -> Option<&'static CharacterRecord> {
    CHARACTERS.iter().find(|record| record.id == id)
}

/// Class identifiers in table order.
///
/// This is the ordering probability vectors are indexed by.
pub fn class_names() -> impl Iterator<Item = &'static str> {
    CHARACTERS.iter().map(|record| record.id)
}
