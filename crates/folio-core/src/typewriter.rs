use std::time::Duration;

/// One instruction of a typing sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Edit the visible text into this string: backspace to the common
    /// prefix, then type the rest.
    Text(&'static str),
    Pause(Duration),
}

/// Looping type/delete animation whose output is a pure function of
/// elapsed time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    steps: Vec<Step>,
    type_interval: Duration,
    delete_interval: Duration,
}

impl Typewriter {
    pub fn new(steps: Vec<Step>, type_interval: Duration, delete_interval: Duration) -> Self {
        Self {
            steps,
            type_interval,
            delete_interval,
        }
    }

    /// Headline animation for the home page: type the name, hold, erase,
    /// hold, type it again, hold.
    pub fn hero(name: &'static str) -> Self {
        Self::new(
            vec![
                Step::Text(name),
                Step::Pause(Duration::from_millis(2000)),
                Step::Text(""),
                Step::Pause(Duration::from_millis(500)),
                Step::Text(name),
                Step::Pause(Duration::from_millis(2000)),
            ],
            Duration::from_millis(60),
            Duration::from_millis(30),
        )
    }

    /// Visible text after `elapsed` of animation.
    pub fn text_at(&self, elapsed: Duration) -> String {
        let first_pass = self.pass_duration("");
        if elapsed < first_pass {
            return self.walk("", elapsed);
        }

        let end = self.final_text("");
        let cycle = self.pass_duration(&end);
        if cycle.is_zero() {
            return end;
        }
        let into_cycle = (elapsed - first_pass).as_nanos() % cycle.as_nanos();
        self.walk(&end, Duration::from_nanos(into_cycle as u64))
    }

    fn edit_cost(&self, from: &str, to: &str) -> (usize, usize) {
        let common = from
            .chars()
            .zip(to.chars())
            .take_while(|(a, b)| a == b)
            .count();
        (from.chars().count() - common, to.chars().count() - common)
    }

    fn step_duration(&self, current: &str, step: &Step) -> Duration {
        match step {
            Step::Pause(d) => *d,
            Step::Text(target) => {
                let (deletes, types) = self.edit_cost(current, target);
                self.delete_interval * deletes as u32 + self.type_interval * types as u32
            }
        }
    }

    fn pass_duration(&self, start: &str) -> Duration {
        let mut current = start.to_string();
        let mut total = Duration::ZERO;
        for step in &self.steps {
            total += self.step_duration(&current, step);
            if let Step::Text(target) = step {
                current = target.to_string();
            }
        }
        total
    }

    fn final_text(&self, start: &str) -> String {
        self.steps
            .iter()
            .rev()
            .find_map(|step| match step {
                Step::Text(target) => Some(target.to_string()),
                Step::Pause(_) => None,
            })
            .unwrap_or_else(|| start.to_string())
    }

    fn walk(&self, start: &str, mut remaining: Duration) -> String {
        let mut current = start.to_string();
        for step in &self.steps {
            let cost = self.step_duration(&current, step);
            if remaining < cost {
                if let Step::Text(target) = step {
                    return self.partial_edit(&current, target, remaining);
                }
                return current;
            }
            remaining -= cost;
            if let Step::Text(target) = step {
                current = target.to_string();
            }
        }
        current
    }

    fn partial_edit(&self, from: &str, to: &str, elapsed: Duration) -> String {
        let (deletes, _) = self.edit_cost(from, to);
        let from_len = from.chars().count();
        let delete_time = self.delete_interval * deletes as u32;

        if elapsed < delete_time {
            let removed = (elapsed.as_nanos() / self.delete_interval.as_nanos().max(1)) as usize;
            return from.chars().take(from_len - removed).collect();
        }

        let common = from_len - deletes;
        let typed = ((elapsed - delete_time).as_nanos() / self.type_interval.as_nanos().max(1))
            as usize;
        to.chars().take(common + typed).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let tw = Typewriter::hero("Shekhar");
        assert_eq!(tw.text_at(ms(0)), "");
        assert_eq!(tw.text_at(ms(60)), "S");
        assert_eq!(tw.text_at(ms(179)), "Sh");
        assert_eq!(tw.text_at(ms(420)), "Shekhar");
    }

    #[test]
    fn test_holds_then_deletes() {
        let tw = Typewriter::hero("Shekhar");
        // typed by 420ms, held until 2420ms
        assert_eq!(tw.text_at(ms(2419)), "Shekhar");
        assert_eq!(tw.text_at(ms(2420)), "Shekhar");
        assert_eq!(tw.text_at(ms(2450)), "Shekha");
        // 7 deletes * 30ms = 210ms
        assert_eq!(tw.text_at(ms(2630)), "");
        assert_eq!(tw.text_at(ms(3000)), "");
    }

    #[test]
    fn test_loops_forever() {
        let tw = Typewriter::hero("Shekhar");
        // first pass: 420 + 2000 + 210 + 500 + 420 + 2000 = 5550ms
        // each later cycle starts from "Shekhar": 0 + 2000 + 210 + 500 + 420 + 2000 = 5130ms
        assert_eq!(tw.text_at(ms(5550)), "Shekhar");
        assert_eq!(tw.text_at(ms(5550 + 2030)), "Shekha");
        assert_eq!(tw.text_at(ms(5550 + 5130 + 2030)), "Shekha");
        assert_eq!(
            tw.text_at(ms(5550 + 5130 * 40 + 2800)),
            tw.text_at(ms(5550 + 2800))
        );
    }

    #[test]
    fn test_common_prefix_is_kept() {
        let tw = Typewriter::new(
            vec![Step::Text("rustacean"), Step::Text("rusty")],
            ms(10),
            ms(10),
        );
        // 90ms to type, then delete "acean" (5) and type "y" (1)
        assert_eq!(tw.text_at(ms(90)), "rustacean");
        assert_eq!(tw.text_at(ms(140)), "rust");
        assert_eq!(tw.text_at(ms(149)), "rust");
        assert_eq!(tw.text_at(ms(150)), "rusty");
    }

    #[test]
    fn test_handles_multibyte_chars() {
        let tw = Typewriter::new(vec![Step::Text("héllo")], ms(10), ms(10));
        assert_eq!(tw.text_at(ms(20)), "hé");
    }
}
