use crate::{Character, Item, Link, ResourceList, Thumbnail};

const IMAGE_BASE: &str = "http://i.annihil.us/u/prod/marvel/i/mg";
const NO_IMAGE: &str = "http://i.annihil.us/u/prod/marvel/i/mg/b/40/image_not_available";

struct Entry {
    id: u64,
    name: &'static str,
    description: &'static str,
    image: Option<&'static str>,
    comics: (u32, &'static str),
    series: (u32, &'static str),
    stories: u32,
    events: (u32, &'static str),
}

const ENTRIES: &[Entry] = &[
    Entry { id: 1009220, name: "Captain America", description: "Vowing to serve his country any way he could, young Steve Rogers took the super soldier serum to become America's one-man army.", image: Some("3/50/537ba56d31087"), comics: (2015, "Captain America Comics (1941) #1"), series: (518, "Captain America (2018 - Present)"), stories: 3063, events: (31, "Acts of Vengeance!") },
    Entry { id: 1009368, name: "Iron Man", description: "Billionaire industrialist Tony Stark created an advanced suit of armor to save his life and escape captivity.", image: Some("9/c0/527bb7b37ff55"), comics: (2607, "Iron Man (1968) #1"), series: (617, "Iron Man (2020 - Present)"), stories: 3880, events: (31, "Acts of Vengeance!") },
    Entry { id: 1009351, name: "Hulk", description: "Caught in a gamma bomb explosion, Dr. Bruce Banner became the Hulk, a powerful but misunderstood hero.", image: Some("5/a0/538615ca33ab0"), comics: (1720, "Incredible Hulk (1962) #1"), series: (515, "Immortal Hulk (2018 - Present)"), stories: 2605, events: (26, "Age of Ultron") },
    Entry { id: 1009618, name: "Scarlet Witch", description: "Wanda Maximoff is a powerful mutant who can manipulate reality itself using chaos magic.", image: Some("1/03/526548a343e4b"), comics: (850, "Scarlet Witch (2015) #1"), series: (200, "Scarlet Witch (2015 - 2017)"), stories: 1200, events: (15, "House of M") },
    Entry { id: 1009718, name: "Doctor Strange", description: "Stephen Strange became the Sorcerer Supreme, protector of Earth against magical and mystical threats.", image: Some("c/e0/535fedb6ec137"), comics: (1200, "Doctor Strange (1968) #1"), series: (300, "Doctor Strange (2015 - 2018)"), stories: 2100, events: (18, "Infinity War") },
    Entry { id: 1010338, name: "Groot", description: "Groot is a sentient, tree-like creature and a member of the Guardians of the Galaxy.", image: Some("9/00/537ba57ee9938"), comics: (300, "Guardians of the Galaxy (2013) #1"), series: (100, "Guardians of the Galaxy (2013 - 2015)"), stories: 400, events: (10, "Annihilation: Conquest") },
    Entry { id: 1010744, name: "Rocket Raccoon", description: "A genetically modified raccoon with exceptional marksmanship and tactical skills.", image: Some("8/c0/5202887448860"), comics: (400, "Rocket Raccoon (2014) #1"), series: (120, "Rocket Raccoon (2014 - 2015)"), stories: 500, events: (12, "Annihilation: Conquest") },
    Entry { id: 1010733, name: "Star-Lord", description: "Peter Quill is the half-human, half-alien leader of the Guardians of the Galaxy.", image: Some("c/60/4c0035c8a54c7"), comics: (550, "Legendary Star-Lord (2014) #1"), series: (150, "Guardians of the Galaxy (2013 - 2015)"), stories: 700, events: (14, "Infinity Countdown") },
    Entry { id: 1010846, name: "Ant-Man", description: "Scott Lang is a master thief who becomes a hero with the ability to shrink to the size of an ant.", image: Some("7/60/5204c9b57b65f"), comics: (600, "Ant-Man (2015) #1"), series: (150, "Ant-Man (2015)"), stories: 700, events: (8, "Infinity War") },
    Entry { id: 1009285, name: "Wasp", description: "Hope van Dyne can shrink to the size of an insect while retaining superhuman strength.", image: Some("4/c0/537bafc0acb7a"), comics: (250, "Wasp (2016) #1"), series: (80, "Wasp (2016)"), stories: 350, events: (10, "Secret Wars") },
    Entry { id: 1009610, name: "Hawkeye", description: "Clint Barton is a highly skilled marksman and a member of the Avengers.", image: Some("f/30/535c524b7a68d"), comics: (700, "Hawkeye (2012) #1"), series: (250, "Hawkeye (2012 - 2015)"), stories: 900, events: (13, "Age of Ultron") },
    Entry { id: 1009710, name: "Wolverine", description: "James Howlett is a mutant with enhanced senses and an accelerated healing factor.", image: Some("c/30/5361d8c9337de"), comics: (2200, "Wolverine (1988) #1"), series: (350, "Wolverine (2010)"), stories: 2900, events: (20, "X-Men: Days of Future Past") },
    Entry { id: 1009823, name: "Jean Grey", description: "One of the original X-Men and a powerful telepath.", image: Some("5/80/52631d4a42d58"), comics: (1200, "X-Men (1963) #1"), series: (300, "X-Men: Phoenix (2004)"), stories: 1500, events: (15, "The Phoenix Saga") },
    Entry { id: 1009468, name: "Cyclops", description: "Scott Summers is a founding member of the X-Men who shoots powerful beams from his eyes.", image: Some("1/d0/534c6db983d8b"), comics: (1300, "X-Men (1963) #1"), series: (280, "X-Men (2010)"), stories: 1700, events: (18, "X-Cutioner's Song") },
    Entry { id: 1009338, name: "Iron Fist (Danny Rand)", description: "Danny Rand wields the power of the Iron Fist.", image: Some("6/60/526032048d1a1"), comics: (600, "Iron Fist (1975) #1"), series: (120, "Immortal Iron Fist (2006 - 2009)"), stories: 800, events: (6, "Shadowland") },
    Entry { id: 1011120, name: "Iron Lad", description: "", image: None, comics: (30, "Young Avengers (2005) #1"), series: (8, "Young Avengers (2005 - 2006)"), stories: 35, events: (1, "Secret Invasion") },
    Entry { id: 1009370, name: "Iron Monger", description: "Obadiah Stane built the Iron Monger armor to destroy Tony Stark.", image: Some("c/10/4ce5a4d8a7c6f"), comics: (40, "Iron Man (1968) #163"), series: (12, "Iron Man (1968 - 1996)"), stories: 45, events: (0, "") },
    Entry { id: 1009165, name: "Avengers", description: "Earth's Mightiest Heroes joined forces to take on threats that were too big for any one hero to tackle.", image: Some("9/20/5102c774ebae7"), comics: (1700, "Avengers (1963) #1"), series: (140, "Avengers (1963 - 1996)"), stories: 2800, events: (31, "Civil War") },
    Entry { id: 1009187, name: "Black Panther", description: "T'Challa is the king and protector of Wakanda.", image: Some("6/60/5261a80a67e7d"), comics: (850, "Black Panther (1977) #1"), series: (180, "Black Panther (2016 - 2018)"), stories: 1100, events: (21, "Secret Wars") },
    Entry { id: 1009189, name: "Black Widow", description: "Natasha Romanoff is a world-class spy and Avenger.", image: Some("f/30/50fecad1f395b"), comics: (650, "Black Widow (2014) #1"), series: (200, "Black Widow (2016 - 2017)"), stories: 800, events: (15, "Secret Invasion") },
    Entry { id: 1009257, name: "Cyclops (Ultimate)", description: "", image: None, comics: (30, "Ultimate X-Men (2001) #1"), series: (5, "Ultimate X-Men (2001 - 2009)"), stories: 40, events: (1, "Ultimatum") },
    Entry { id: 1009262, name: "Daredevil", description: "Matt Murdock fights crime in Hell's Kitchen as the Man Without Fear.", image: Some("d/50/50febb79985ee"), comics: (1100, "Daredevil (1964) #1"), series: (120, "Daredevil (2015 - 2018)"), stories: 1900, events: (12, "Shadowland") },
    Entry { id: 1009282, name: "Doctor Doom", description: "Victor von Doom rules Latveria with an iron fist.", image: Some("3/60/53176bb096d17"), comics: (900, "Fantastic Four (1961) #5"), series: (300, "Doctor Doom (2019 - 2021)"), stories: 1200, events: (25, "Secret Wars") },
    Entry { id: 1009297, name: "Falcon", description: "Sam Wilson soars into battle on mechanical wings.", image: Some("f/c0/526032b3d4ab5"), comics: (500, "Captain America (1968) #117"), series: (120, "Falcon (2017)"), stories: 700, events: (9, "Civil War") },
    Entry { id: 1009299, name: "Fantastic Four", description: "Marvel's first family of explorers.", image: Some("9/c0/527bb7b37ff55"), comics: (1600, "Fantastic Four (1961) #1"), series: (200, "Fantastic Four (2018 - Present)"), stories: 2500, events: (30, "Secret Wars") },
    Entry { id: 1009313, name: "Gambit", description: "Remy LeBeau charges objects with kinetic energy.", image: Some("a/40/52696aa8aee99"), comics: (700, "Gambit (1999) #1"), series: (130, "Gambit (2012 - 2013)"), stories: 900, events: (12, "X-Tinction Agenda") },
    Entry { id: 1009327, name: "Human Torch", description: "Johnny Storm bursts into flame at will.", image: Some("2/70/52c5e4ed9f0d6"), comics: (1100, "Fantastic Four (1961) #1"), series: (180, "Human Torch (2003 - 2004)"), stories: 1500, events: (20, "Secret Wars") },
    Entry { id: 1009356, name: "Invisible Woman", description: "Susan Storm bends light to vanish and projects force fields.", image: Some("c/c0/537bc5db7c77d"), comics: (1100, "Fantastic Four (1961) #1"), series: (170, "Fantastic Four (2018 - Present)"), stories: 1500, events: (21, "Secret Wars") },
    Entry { id: 1009362, name: "Iceman", description: "Bobby Drake can freeze moisture around him.", image: Some("d/a0/52695b4ddfb3f"), comics: (900, "X-Men (1963) #1"), series: (200, "Iceman (2017 - 2018)"), stories: 1200, events: (18, "Inferno") },
    Entry { id: 1009382, name: "Juggernaut", description: "Cain Marko is unstoppable once he gets moving.", image: Some("5/c0/537ba730e05e0"), comics: (400, "X-Men (1963) #12"), series: (140, "Juggernaut (1999)"), stories: 500, events: (10, "Fear Itself") },
    Entry { id: 1009417, name: "Magneto", description: "Max Eisenhardt commands magnetism itself.", image: Some("3/b0/5261a7e53f827"), comics: (1200, "X-Men (1963) #1"), series: (260, "Magneto (2014 - 2015)"), stories: 1600, events: (25, "House of M") },
    Entry { id: 1009454, name: "Moon Knight", description: "Marc Spector is the fist of Khonshu.", image: Some("9/d0/5111527040594"), comics: (400, "Moon Knight (1980) #1"), series: (60, "Moon Knight (2016 - 2018)"), stories: 500, events: (5, "Shadowland") },
    Entry { id: 1009471, name: "Nick Fury", description: "Director of S.H.I.E.L.D.", image: Some("3/00/52740e3d5e5f3"), comics: (1100, "Sgt. Fury (1963) #1"), series: (320, "Secret Warriors (2009 - 2011)"), stories: 1300, events: (20, "Secret War") },
    Entry { id: 1009508, name: "Kitty Pryde", description: "", image: Some("9/30/5286955b0f6b5"), comics: (800, "X-Men (1963) #129"), series: (160, "Excalibur (1988 - 1998)"), stories: 1000, events: (15, "Mutant Massacre") },
    Entry { id: 1009512, name: "Phoenix", description: "The cosmic Phoenix Force in its host.", image: Some("c/10/528d369de3e4f"), comics: (300, "X-Men (1963) #101"), series: (80, "Phoenix Resurrection (2017 - 2018)"), stories: 400, events: (6, "The Phoenix Saga") },
    Entry { id: 1009515, name: "Punisher", description: "Frank Castle wages a one-man war on crime.", image: Some("e/90/5261a8ae7df43"), comics: (1400, "Amazing Spider-Man (1963) #129"), series: (250, "Punisher (2018 - 2019)"), stories: 1700, events: (9, "Civil War") },
    Entry { id: 1009546, name: "Rogue", description: "Anna Marie absorbs the powers of anyone she touches.", image: Some("3/10/5112d84e2166c"), comics: (900, "Avengers Annual (1967) #10"), series: (220, "Rogue (2004 - 2005)"), stories: 1100, events: (18, "Messiah Complex") },
    Entry { id: 1009562, name: "Scarlet Spider", description: "", image: None, comics: (120, "Scarlet Spider (2012) #1"), series: (30, "Scarlet Spider (2012 - 2013)"), stories: 150, events: (2, "Clone Saga") },
    Entry { id: 1009609, name: "Spider-Man", description: "Bitten by a radioactive spider, Peter Parker gained the proportionate strength of a spider.", image: Some("3/50/526548a343e4b"), comics: (4000, "Amazing Fantasy (1962) #15"), series: (1000, "Amazing Spider-Man (1963 - 1998)"), stories: 6000, events: (40, "Civil War") },
    Entry { id: 1009629, name: "Storm", description: "Ororo Munroe commands the weather.", image: Some("6/40/526963dad214d"), comics: (1000, "Giant-Size X-Men (1975) #1"), series: (250, "Storm (2014 - 2015)"), stories: 1300, events: (20, "Secret Wars") },
    Entry { id: 1009652, name: "Thanos", description: "The Mad Titan seeks the Infinity Stones.", image: Some("6/40/5274137e3e2cd"), comics: (800, "Iron Man (1968) #55"), series: (300, "Thanos (2016 - 2018)"), stories: 900, events: (25, "Infinity Gauntlet") },
    Entry { id: 1009664, name: "Thor", description: "The God of Thunder wields the enchanted hammer Mjolnir.", image: Some("d/d0/5269657a74350"), comics: (2500, "Journey Into Mystery (1952) #83"), series: (600, "Thor (2020 - Present)"), stories: 3500, events: (35, "Ragnarok") },
    Entry { id: 1009697, name: "Vision", description: "A synthezoid Avenger built by Ultron.", image: Some("9/d0/5111527040594"), comics: (800, "Avengers (1963) #57"), series: (200, "Vision (2015 - 2016)"), stories: 1000, events: (18, "Avengers Disassembled") },
    Entry { id: 1009685, name: "Ultron", description: "A sentient robot bent on destroying humanity.", image: Some("5/b0/5261a7f6e4e42"), comics: (400, "Avengers (1963) #54"), series: (130, "Ultron Forever (2015)"), stories: 500, events: (14, "Age of Ultron") },
    Entry { id: 1009707, name: "Winter Soldier", description: "Bucky Barnes returned from the past as a brainwashed assassin.", image: Some("7/40/5268159f2fb8e"), comics: (350, "Captain America (2005) #6"), series: (90, "Winter Soldier (2012 - 2013)"), stories: 450, events: (8, "Fear Itself") },
];

fn list(available: u32, first: &str) -> ResourceList {
    let items = if first.is_empty() {
        Vec::new()
    } else {
        vec![Item {
            name: first.to_string(),
            kind: None,
        }]
    };
    ResourceList { available, items }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

pub(crate) fn characters() -> Vec<Character> {
    ENTRIES
        .iter()
        .map(|e| Character {
            id: e.id,
            name: e.name.to_string(),
            description: e.description.to_string(),
            thumbnail: Thumbnail {
                path: match e.image {
                    Some(path) => format!("{IMAGE_BASE}/{path}"),
                    None => NO_IMAGE.to_string(),
                },
                extension: "jpg".to_string(),
            },
            comics: list(e.comics.0, e.comics.1),
            series: list(e.series.0, e.series.1),
            stories: ResourceList {
                available: e.stories,
                items: vec![Item {
                    name: format!("Cover #{}", e.stories),
                    kind: Some("cover".to_string()),
                }],
            },
            events: list(e.events.0, e.events.1),
            urls: vec![
                Link {
                    kind: "detail".to_string(),
                    url: format!("http://marvel.com/characters/{}/{}", e.id, slug(e.name)),
                },
                Link {
                    kind: "wiki".to_string(),
                    url: format!("http://marvel.com/universe/{}", slug(e.name)),
                },
            ],
        })
        .collect()
}
