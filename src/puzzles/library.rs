use super::Difficulty;
use super::Puzzle;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

/// Built-in puzzle library. Every entry fits the 13-column board grid;
/// long compound words carry a manual hyphen at the line break.
const LIBRARY: [(Difficulty, &str, &str); 40] = [
    (Difficulty::Hard, "SPRICHWORT", "MORGENSTUND HAT GOLD IM MUND"),
    (Difficulty::Easy, "FILMTITEL", "DER HERR DER RINGE"),
    (Difficulty::Medium, "GEOGRAFIE", "BAYERISCHER WALD"),
    (Difficulty::Medium, "ESSEN", "CURRYWURST MIT POMMES"),
    (Difficulty::Medium, "BERUF", "SCHORNSTEIN- FEGER"),
    (Difficulty::Hard, "TECHNIK", "KÜNSTLICHE INTELLIGENZ"),
    (Difficulty::Hard, "TIERE", "ELEFANT IM PORZELLAN- LADEN"),
    (Difficulty::Medium, "SPRICHWORT", "WER RASTET DER ROSTET"),
    (Difficulty::Easy, "ORT", "BRANDENBURGER TOR"),
    (Difficulty::Easy, "ESSEN", "WIENER SCHNITZEL"),
    (Difficulty::Easy, "FILM", "KRIEG DER STERNE"),
    (Difficulty::Medium, "HOBBY", "BRIEFMARKEN SAMMELN"),
    (Difficulty::Medium, "WETTER", "GEWITTER IM ANZUG"),
    (Difficulty::Hard, "SPORT", "FUSSBALL WELT- MEISTERSCHAFT"),
    (Difficulty::Easy, "HAUSHALT", "WASCH- MASCHINE"),
    (Difficulty::Medium, "VERKEHR", "AUTOBAHN- AUSFAHRT"),
    (Difficulty::Easy, "KLEIDUNG", "KURZE LEDERHOSE"),
    (Difficulty::Medium, "SPRICHWORT", "ALLER ANFANG IST SCHWER"),
    (Difficulty::Hard, "LITERATUR", "FAUST EINE TRAGÖDIE"),
    (Difficulty::Medium, "STADT", "HAMBURG MEINE PERLE"),
    (Difficulty::Medium, "HISTORIE", "DER FALL DER MAUER"),
    (Difficulty::Easy, "PFLANZE", "ROTE ROSE"),
    (Difficulty::Hard, "BERUF", "KRAFTFAHRZEUG- MECHANIKER"),
    (Difficulty::Hard, "MUSIK", "DIE VIER JAHRES- ZEITEN"),
    (Difficulty::Medium, "CHEMIE", "SAUERSTOFF- FLASCHE"),
    (Difficulty::Easy, "OBST", "GRÜNER APFEL"),
    (Difficulty::Easy, "MÖBEL", "KLEIDER- SCHRANK"),
    (Difficulty::Medium, "STADT", "MÜNCHEN LEUCHTET"),
    (Difficulty::Easy, "WETTER", "SONNEN- SCHEIN"),
    (Difficulty::Medium, "SPORT", "OLYMPISCHE SPIELE"),
    (Difficulty::Medium, "TIER", "SIBIRISCHER TIGER"),
    (Difficulty::Easy, "BERUF", "FEUERWEHR- MANN"),
    (Difficulty::Hard, "SPIEL", "MENSCH ÄRGERE DICH NICHT"),
    (Difficulty::Hard, "ESSEN", "SCHWARZWÄLDER KIRSCHTORTE"),
    (Difficulty::Hard, "NATUR", "STALAKTITEN UND STALAGMITEN"),
    (Difficulty::Hard, "ORT", "SCHLOSS NEUSCHWAN- STEIN"),
    (Difficulty::Easy, "TECHNIK", "ELEKTRO- AUTO"),
    (Difficulty::Easy, "FILM", "KEIN OHR HASEN"),
    (Difficulty::Medium, "MUSIK", "ATEMLOS DURCH DIE NACHT"),
    (Difficulty::Easy, "GEGENSTAND", "TASCHEN- LAMPE"),
];

/// Offline puzzle pool. Draws are random but respect the difficulty ramp
/// and category exclusions as long as any entry still qualifies.
#[derive(Debug)]
pub struct Library {
    rng: SmallRng,
}

impl Default for Library {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Library {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draws one puzzle. Filters relax in steps: exact difficulty and
    /// fresh category first, then any difficulty, then anything at all.
    pub fn draw(&mut self, difficulty: Difficulty, excluded: &[String]) -> Puzzle {
        let fresh = |category: &str| !excluded.iter().any(|used| used == category);
        let candidates: Vec<usize> = (0..LIBRARY.len())
            .filter(|i| LIBRARY[*i].0 == difficulty && fresh(LIBRARY[*i].1))
            .collect();
        let candidates = if candidates.is_empty() {
            (0..LIBRARY.len()).filter(|i| fresh(LIBRARY[*i].1)).collect()
        } else {
            candidates
        };
        let index = if candidates.is_empty() {
            self.rng.random_range(0..LIBRARY.len())
        } else {
            candidates[self.rng.random_range(0..candidates.len())]
        };
        let (_, category, text) = LIBRARY[index];
        Puzzle::new(category, text)
    }
}
