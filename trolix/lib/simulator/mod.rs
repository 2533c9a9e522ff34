//! Terminal command simulator.
//!
//! Commands never run. A [`CommandTable`] holds an ordered list of rules, each
//! pairing one or more matchers with a canned response. The first rule with a
//! matching matcher wins, and anything unmatched falls through to a
//! `command not found` line. Prefix rules for security tools come before the
//! exact shell-command rules, so `nmap ls` is an nmap scan, not a listing.

mod responses;

pub use responses::SANDBOX_ID_PLACEHOLDER;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Number of leading sandbox id characters used in rendered responses.
pub const SHORT_ID_LEN: usize = 8;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// How a rule recognises a normalized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// The command starts with the given text, whatever the arguments.
    Prefix(&'static str),

    /// The command is exactly the given text.
    Exact(&'static str),
}

/// A response and the matchers that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRule {
    matchers: Vec<Matcher>,
    response: &'static str,
}

/// An ordered set of rules evaluated first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    rules: Vec<CommandRule>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Matcher {
    /// Tests a command that has already been trimmed and lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::Prefix(prefix) => normalized.starts_with(*prefix),
            Matcher::Exact(exact) => normalized == *exact,
        }
    }
}

impl CommandRule {
    /// A rule selected by any of `matchers`.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>, response: &'static str) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
            response,
        }
    }

    /// A rule selected by a command prefix.
    pub fn prefix(prefix: &'static str, response: &'static str) -> Self {
        Self::new([Matcher::Prefix(prefix)], response)
    }

    /// A rule selected by an exact command.
    pub fn exact(command: &'static str, response: &'static str) -> Self {
        Self::new([Matcher::Exact(command)], response)
    }

    /// Returns `true` if any matcher accepts the normalized command.
    pub fn matches(&self, normalized: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(normalized))
    }
}

impl CommandTable {
    /// Creates a table from rules in priority order.
    pub fn new(rules: Vec<CommandRule>) -> Self {
        Self { rules }
    }

    /// The built-in table of security tools followed by common shell commands.
    pub fn standard() -> Self {
        Self::new(vec![
            CommandRule::prefix("nmap", responses::NMAP),
            CommandRule::new(
                [Matcher::Prefix("metasploit"), Matcher::Exact("msfconsole")],
                responses::METASPLOIT,
            ),
            CommandRule::prefix("sqlmap", responses::SQLMAP),
            CommandRule::prefix("hashcat", responses::HASHCAT),
            CommandRule::prefix("john", responses::JOHN),
            CommandRule::prefix("aircrack-ng", responses::AIRCRACK),
            CommandRule::exact("ls", responses::LS),
            CommandRule::exact("whoami", responses::WHOAMI),
            CommandRule::exact("pwd", responses::PWD),
            CommandRule::exact("uname -a", responses::UNAME),
            CommandRule::exact("ps aux", responses::PS),
            CommandRule::exact("ip a", responses::IP),
            CommandRule::exact("df -h", responses::DF),
            CommandRule::exact("free -h", responses::FREE),
            CommandRule::exact("netstat", responses::NETSTAT),
            CommandRule::exact("help", responses::HELP),
        ])
    }

    /// Produces the simulated output of `command` sent to `sandbox_id`.
    ///
    /// Matching uses the trimmed, lowercased command. The fallback message
    /// echoes the command exactly as it was submitted.
    pub fn resolve(&self, sandbox_id: &str, command: &str) -> String {
        let normalized = normalize(command);
        match self.rules.iter().find(|rule| rule.matches(&normalized)) {
            Some(rule) => rule
                .response
                .replace(SANDBOX_ID_PLACEHOLDER, &short_id(sandbox_id)),
            None => format!("bash: {command}: command not found"),
        }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Trims surrounding whitespace and lowercases a command for matching.
pub fn normalize(command: &str) -> String {
    command.trim().to_lowercase()
}

/// The leading characters of a sandbox id used as its simulated hostname.
pub fn short_id(sandbox_id: &str) -> String {
    sandbox_id.chars().take(SHORT_ID_LEN).collect()
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SANDBOX_ID: &str = "3f2a9c1e-7b44-4d2e-9a10-5c6d7e8f9a0b";

    #[test]
    fn test_exact_shell_commands() {
        let table = CommandTable::standard();
        assert!(table.resolve(SANDBOX_ID, "ls").contains("bin"));
        assert_eq!(table.resolve(SANDBOX_ID, "whoami"), "root");
        assert_eq!(table.resolve(SANDBOX_ID, "pwd"), "/root");
        assert!(table.resolve(SANDBOX_ID, "df -h").starts_with("Filesystem"));
        assert!(table.resolve(SANDBOX_ID, "help").contains("aircrack-ng"));
    }

    #[test]
    fn test_normalization_before_matching() {
        let table = CommandTable::standard();
        assert_eq!(table.resolve(SANDBOX_ID, "  WhoAmI \n"), "root");
        assert!(table.resolve(SANDBOX_ID, "PS AUX").contains("/sbin/init"));
    }

    #[test]
    fn test_exact_rules_do_not_accept_arguments() {
        let table = CommandTable::standard();
        assert_eq!(
            table.resolve(SANDBOX_ID, "ls -la"),
            "bash: ls -la: command not found"
        );
        assert_eq!(
            table.resolve(SANDBOX_ID, "uname"),
            "bash: uname: command not found"
        );
    }

    #[test]
    fn test_uname_interpolates_short_id() {
        let output = CommandTable::standard().resolve(SANDBOX_ID, "uname -a");
        assert!(output.starts_with("Linux sandbox-3f2a9c1e "));
        assert!(!output.contains(SANDBOX_ID_PLACEHOLDER));
    }

    #[test]
    fn test_security_tools_match_by_prefix() {
        let table = CommandTable::standard();
        assert!(table
            .resolve(SANDBOX_ID, "nmap -sV 10.0.0.1")
            .contains("Starting Nmap scan"));
        assert!(table.resolve(SANDBOX_ID, "msfconsole").contains("msf6 >"));
        assert!(table
            .resolve(SANDBOX_ID, "metasploit --quiet")
            .contains("metasploit v6"));
        assert!(table
            .resolve(SANDBOX_ID, "sqlmap -u http://target")
            .starts_with("sqlmap/"));
        assert!(table.resolve(SANDBOX_ID, "hashcat -m 0").starts_with("hashcat"));
        assert!(table
            .resolve(SANDBOX_ID, "john hashes.txt")
            .starts_with("John the Ripper"));
        assert!(table
            .resolve(SANDBOX_ID, "AIRCRACK-NG wpa.cap")
            .starts_with("Aircrack-ng"));
    }

    #[test]
    fn test_prefix_rules_take_precedence() {
        // "nmap ls" must not fall through to the exact "ls" rule.
        let output = CommandTable::standard().resolve(SANDBOX_ID, "nmap ls");
        assert!(output.contains("Starting Nmap scan"));
    }

    #[test]
    fn test_msfconsole_is_exact_only() {
        assert_eq!(
            CommandTable::standard().resolve(SANDBOX_ID, "msfconsole -q"),
            "bash: msfconsole -q: command not found"
        );
    }

    #[test]
    fn test_fallback_preserves_original_text() {
        let table = CommandTable::standard();
        assert_eq!(
            table.resolve(SANDBOX_ID, "bogus123"),
            "bash: bogus123: command not found"
        );
        assert_eq!(
            table.resolve(SANDBOX_ID, " BoGuS "),
            "bash:  BoGuS : command not found"
        );
    }

    #[test]
    fn test_custom_table_ordering() {
        let table = CommandTable::new(vec![
            CommandRule::exact("echo", "exact"),
            CommandRule::prefix("echo", "prefix"),
        ]);
        assert_eq!(table.resolve(SANDBOX_ID, "echo"), "exact");
        assert_eq!(table.resolve(SANDBOX_ID, "echo hi"), "prefix");
        assert_eq!(table.rules().len(), 2);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(SANDBOX_ID), "3f2a9c1e");
        assert_eq!(short_id("abc"), "abc");
    }
}
