use super::Lemmatizer;

/// Irregular verb forms and their base form.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
	("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"), ("being", "be"),
	("has", "have"), ("had", "have"), ("having", "have"),
	("does", "do"), ("did", "do"), ("done", "do"),
	("went", "go"), ("gone", "go"), ("goes", "go"),
	("ate", "eat"), ("eaten", "eat"),
	("saw", "see"), ("seen", "see"),
	("took", "take"), ("taken", "take"),
	("gave", "give"), ("given", "give"),
	("came", "come"),
	("became", "become"),
	("began", "begin"), ("begun", "begin"),
	("made", "make"),
	("said", "say"),
	("got", "get"), ("gotten", "get"),
	("knew", "know"), ("known", "know"),
	("thought", "think"),
	("brought", "bring"),
	("bought", "buy"),
	("caught", "catch"),
	("taught", "teach"),
	("found", "find"),
	("told", "tell"),
	("left", "leave"),
	("felt", "feel"),
	("kept", "keep"),
	("held", "hold"),
	("stood", "stand"),
	("heard", "hear"),
	("met", "meet"),
	("sat", "sit"),
	("ran", "run"),
	("won", "win"),
	("wrote", "write"), ("written", "write"),
	("spoke", "speak"), ("spoken", "speak"),
	("drove", "drive"), ("driven", "drive"),
	("flew", "fly"), ("flown", "fly"),
	("froze", "freeze"), ("frozen", "freeze"),
	("chose", "choose"), ("chosen", "choose"),
	("broke", "break"), ("broken", "break"),
	("fell", "fall"), ("fallen", "fall"),
	("grew", "grow"), ("grown", "grow"),
	("threw", "throw"), ("thrown", "throw"),
	("drew", "draw"), ("drawn", "draw"),
	("sang", "sing"), ("sung", "sing"),
	("swam", "swim"), ("swum", "swim"),
	("lay", "lie"), ("lain", "lie"), ("lying", "lie"),
	("dying", "die"), ("tying", "tie"),
	("paid", "pay"), ("laid", "lay"),
	("fed", "feed"), ("led", "lead"), ("bled", "bleed"), ("fled", "flee"), ("freed", "free"),
];

/// Stems that lost a silent `-e` no spelling rule can predict.
const SILENT_E_STEMS: &[&str] = &[
	"creat", "writ", "invit", "excit", "recit", "unit", "ignit",
	"complet", "delet", "compet",
	"stor", "ignor", "explor", "restor", "scor", "ador",
	"clon", "phon", "postpon",
	"tast", "wast",
	"becom", "welcom",
];

/// Stems that look like they lost a silent `-e` but did not.
const BARE_STEMS: &[&str] = &["focus", "bias"];

/// Endings that lost a silent `-e` when a consonant precedes them (`decid`, `comput`).
const CONSONANT_E_ENDINGS: &[&str] = &[
	"ad", "ag", "am", "ap", "ar", "at", "ib", "id", "ik", "im", "in", "od", "ok", "ot", "ud", "um", "ut",
];

/// Rule-based lemmatizer that always treats its input as a verb.
///
/// Looks the lowercased word up in a table of irregular forms, then
/// strips the regular `-s`, `-es`, `-ies`, `-ed` and `-ing` endings and
/// puts back a doubled consonant or a silent `-e` the ending removed.
/// Nouns and adjectives are lemmatized as if they were verbs.
pub struct VerbLemmatizer;

fn is_vowel(c: char) -> bool {
	matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
	s.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Whether `stem` is a base form that ended in a silent `-e`.
fn lost_silent_e(stem: &[char]) -> bool {
	let n = stem.len();
	if n < 2 {
		return false;
	}
	let (prev, last) = (stem[n - 2], stem[n - 1]);
	let before = if n >= 3 { Some(stem[n - 3]) } else { None };
	let consonant_before = before.is_some_and(|c| !is_vowel(c));

	match (prev, last) {
		(_, 'c' | 'v') => true,
		('s', 's') | ('z', 'z') => false,
		(_, 'z') => true,
		(p, 's') => is_vowel(p) || matches!(p, 'n' | 'r' | 'p' | 'l'),
		('d' | 'r' | 'l', 'g') => true,
		('n', 'g') => n >= 5 && matches!(before, Some('a' | 'e')),
		('i' | 'u', 'l') => consonant_before,
		(p, 'l') => !is_vowel(p) && !matches!(p, 'l' | 'r' | 'w'),
		('i', 'r') => !matches!(before, Some('a' | 'o')),
		('u', 'r') => before != Some('o'),
		_ => {
			let tail: String = [prev, last].iter().collect();
			consonant_before && CONSONANT_E_ENDINGS.contains(&tail.as_str())
		}
	}
}

/// Restores the base of a word whose `-ed` / `-ing` ending was removed.
///
/// - `runn` → `run` (doubled final consonant)
/// - `chang` → `change`, `us` → `use` (silent `-e`)
/// - `mak` → `make` (short consonant-vowel-consonant stem)
fn restore_stem(stem: &str) -> String {
	if SILENT_E_STEMS.contains(&stem) {
		return format!("{stem}e");
	}
	if BARE_STEMS.contains(&stem) {
		return stem.to_owned();
	}

	let chars: Vec<char> = stem.chars().collect();
	let len = chars.len();
	if len >= 4 {
		let (a, b) = (chars[len - 2], chars[len - 1]);
		if a == b && !is_vowel(b) && !matches!(b, 'l' | 's' | 'z' | 'f') {
			return chars[..len - 1].iter().collect();
		}
	}
	if lost_silent_e(&chars) {
		return format!("{stem}e");
	}
	if len == 3
		&& !is_vowel(chars[0])
		&& (is_vowel(chars[1]) || chars[1] == 'y')
		&& !is_vowel(chars[2])
		&& !matches!(chars[2], 'w' | 'x' | 'y')
	{
		return format!("{stem}e");
	}
	stem.to_owned()
}

impl Lemmatizer for VerbLemmatizer {
	fn lemmatize(&self, word: &str) -> String {
		let word = word.to_lowercase();

		if let Some((_, base)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == word) {
			return (*base).to_owned();
		}

		let len = word.chars().count();
		if len > 4 && word.ends_with("ies") {
			return format!("{}y", &word[..word.len() - 3]);
		}
		if len > 3
			&& ["sses", "shes", "ches", "xes", "zes"].iter().any(|s| word.ends_with(s))
		{
			return word[..word.len() - 2].to_owned();
		}
		if len > 4 && word.ends_with("ing") {
			// bring, thing
			let stem = &word[..word.len() - 3];
			return if has_vowel(stem) { restore_stem(stem) } else { word };
		}
		if len > 4 && word.ends_with("ied") {
			return format!("{}y", &word[..word.len() - 3]);
		}
		if len > 3 && word.ends_with("eed") {
			// agreed, guaranteed; need, proceed are already base forms
			return if len > 5 && (word.ends_with("reed") || word.ends_with("teed")) {
				word[..word.len() - 1].to_owned()
			} else {
				word
			};
		}
		if len > 3 && word.ends_with("ed") {
			let stem = &word[..word.len() - 2];
			if !has_vowel(stem) {
				return word;
			}
			// died, tied
			if stem.chars().count() == 2 && stem.ends_with(is_vowel) {
				return format!("{stem}e");
			}
			return restore_stem(stem);
		}
		if len > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
			return word[..word.len() - 1].to_owned();
		}
		word
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lemma(word: &str) -> String {
		VerbLemmatizer.lemmatize(word)
	}

	#[test]
	fn irregular_forms() {
		assert_eq!(lemma("was"), "be");
		assert_eq!(lemma("Went"), "go");
		assert_eq!(lemma("written"), "write");
	}

	#[test]
	fn regular_suffixes() {
		assert_eq!(lemma("walked"), "walk");
		assert_eq!(lemma("walks"), "walk");
		assert_eq!(lemma("tries"), "try");
		assert_eq!(lemma("studied"), "study");
		assert_eq!(lemma("watches"), "watch");
		assert_eq!(lemma("playing"), "play");
	}

	#[test]
	fn stem_restoration() {
		assert_eq!(lemma("running"), "run");
		assert_eq!(lemma("stopped"), "stop");
		assert_eq!(lemma("making"), "make");
		assert_eq!(lemma("falling"), "fall");
		assert_eq!(lemma("added"), "add");
	}

	#[test]
	fn silent_e_is_restored() {
		for (form, base) in [
			("used", "use"),
			("using", "use"),
			("changed", "change"),
			("created", "create"),
			("danced", "dance"),
			("agreed", "agree"),
			("writing", "write"),
			("closed", "close"),
			("decided", "decide"),
			("computed", "compute"),
			("moved", "move"),
			("enabled", "enable"),
			("required", "require"),
			("judged", "judge"),
			("typed", "type"),
			("died", "die"),
		] {
			assert_eq!(lemma(form), base, "{form}");
		}
	}

	#[test]
	fn stems_without_silent_e_are_kept() {
		for (form, base) in [
			("visited", "visit"),
			("treated", "treat"),
			("focused", "focus"),
			("needed", "need"),
			("proceed", "proceed"),
			("seeing", "see"),
			("looked", "look"),
			("opened", "open"),
			("called", "call"),
			("passed", "pass"),
			("bringing", "bring"),
			("thing", "thing"),
		] {
			assert_eq!(lemma(form), base, "{form}");
		}
	}

	#[test]
	fn short_and_base_words_are_kept() {
		assert_eq!(lemma("is"), "be");
		assert_eq!(lemma("bus"), "bus");
		assert_eq!(lemma("pass"), "pass");
		assert_eq!(lemma("sing"), "sing");
		assert_eq!(lemma("red"), "red");
	}
}
