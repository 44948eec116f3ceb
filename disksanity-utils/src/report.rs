use disksanity::{Finding, Message, Severity};
use pretty_hex::simple_hex;

fn prefix(finding: &Finding) -> &'static str {
    match (finding.severity, finding.message.is_confirmation()) {
        (Severity::Warning, _) => "**: ",
        (Severity::Notice, _) => "NB: ",
        (Severity::Info, true) => "++: ",
        (Severity::Info, false) => "",
    }
}

pub fn render(finding: &Finding) -> String {
    match &finding.message {
        Message::PartitionEntry { number, entry } => {
            format!("MPT#{}: {}", number, simple_hex(&entry.as_bytes()))
        }
        message => format!("{}{}", prefix(finding), message),
    }
}

pub fn print(findings: &[Finding]) {
    for finding in findings {
        println!("{}", render(finding));
    }
    let warnings = findings.iter().filter(|f| f.severity == Severity::Warning).count();
    let notices = findings.iter().filter(|f| f.severity == Severity::Notice).count();
    log::info!("{} warnings, {} notices", warnings, notices);
}
