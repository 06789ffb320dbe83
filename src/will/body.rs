//! Main document body of the will.
//!
//! Every article is written by its own method on [`WillDocumentBuilder`];
//! headings take the numerals the [`ArticlePlan`] iterator hands out.
use crate::ooxml::docx::{Document, ParagraphAlignment, StyleId};
use crate::will::article::{ArticleKind, ArticlePlan};
use crate::will::input::WillInput;

/// Paragraph inserted before the title of a sample document.
pub const WATERMARK_TEXT: &str = "DRAFT - SAMPLE FOR REFERENCE";

/// Notice inserted before the signature block of a sample document.
pub const SAMPLE_NOTICE: &str = "THIS IS A SAMPLE DOCUMENT FOR REFERENCE ONLY. It is not legal advice \
and has not been reviewed by an attorney. Consult a licensed attorney in your jurisdiction before \
signing any will.";

const SIGNATURE_LINE: &str = "______________________________";
const BLANK: &str = "____________________";

/// Builds the [`Document`] for one will.
pub struct WillDocumentBuilder<'a> {
    will: &'a WillInput,
    sample: bool,
    doc: Document,
}

impl<'a> WillDocumentBuilder<'a> {
    pub fn new(will: &'a WillInput, sample: bool) -> Self {
        Self {
            will,
            sample,
            doc: Document::new(),
        }
    }

    /// Write every section in order and return the finished document.
    pub fn build(mut self) -> Document {
        if self.sample {
            self.doc.add_text(StyleId::Watermark, WATERMARK_TEXT);
        }
        self.title();

        let plan = ArticlePlan::for_will(self.will);
        for (numeral, kind) in plan.iter() {
            self.doc.add_text(StyleId::Heading1, kind.heading(&numeral));
            match kind {
                ArticleKind::Declaration => self.declaration(),
                ArticleKind::Executor => self.executor(),
                ArticleKind::Guardian => self.guardian(),
                ArticleKind::SpecificGifts => self.specific_gifts(),
                ArticleKind::Residuary => self.residuary(),
                ArticleKind::GeneralProvisions => self.general_provisions(),
            }
        }

        if self.sample {
            self.doc.add_text(StyleId::Notice, SAMPLE_NOTICE);
        }
        self.signature_block();
        self.attestation();
        self.affidavit();

        log::debug!(
            "built will body: {} articles, {} paragraphs",
            plan.len(),
            self.doc.paragraphs().len()
        );
        self.doc
    }

    fn clause(&mut self, text: String) {
        self.doc.add_text(StyleId::Clause, text);
    }

    fn title(&mut self) {
        self.doc.add_text(StyleId::Title, "LAST WILL AND TESTAMENT");
        self.doc
            .add_text(StyleId::Subtitle, format!("OF {}", self.will.testator_name.trim()));
    }

    fn declaration(&mut self) {
        self.clause(format!(
            "I, {}, being of sound mind and memory and not acting under duress or undue \
             influence, declare this to be my Last Will and Testament. I revoke all wills and \
             codicils previously made by me.",
            self.will.testator_name.trim()
        ));
    }

    fn executor(&mut self) {
        let will = self.will;
        let executor = will.executor_name.trim();
        self.clause(format!(
            "I appoint {} as Executor of this Will.",
            executor
        ));
        if let Some(alternate) = will.alternate_executor() {
            self.clause(format!(
                "If {} fails to qualify or ceases to act as Executor, I appoint {} as alternate \
                 Executor.",
                executor, alternate
            ));
        }
        self.clause(
            "My Executor may settle my estate without court supervision to the extent \
             permitted by law, and shall not be required to post bond."
                .to_string(),
        );
    }

    fn guardian(&mut self) {
        let will = self.will;
        let Some(guardian) = will.guardian() else {
            return;
        };
        self.clause(format!(
            "If a guardian is needed for any minor child of mine, I appoint {} as Guardian of \
             the person and property of that child.",
            guardian
        ));
        if let Some(alternate) = will.alternate_guardian() {
            self.clause(format!(
                "If {} is unable or unwilling to serve as Guardian, I appoint {} as alternate \
                 Guardian.",
                guardian, alternate
            ));
        }
    }

    fn specific_gifts(&mut self) {
        let will = self.will;
        self.clause("I make the following specific gifts:".to_string());
        for (i, gift) in will.specific_gifts.iter().enumerate() {
            let para = self.doc.add_text(
                StyleId::Clause,
                format!(
                    "{}. I give and bequeath {} to {}, if he/she survives me.",
                    i + 1,
                    gift.gift.trim(),
                    gift.beneficiary.trim()
                ),
            );
            para.set_indent_left(720);
        }
        self.clause(
            "If a beneficiary of a specific gift does not survive me, that gift shall lapse and \
             become part of my residuary estate."
                .to_string(),
        );
    }

    fn residuary(&mut self) {
        let will = self.will;
        self.clause(
            "I give the rest, residue, and remainder of my estate to the following \
             beneficiaries in the shares indicated:"
                .to_string(),
        );
        for (i, share) in will.residuary_beneficiaries.iter().enumerate() {
            let para = self.doc.add_text(
                StyleId::Clause,
                format!(
                    "{}. {}% to {}, if he/she survives me.",
                    i + 1,
                    share.percentage,
                    share.beneficiary.trim()
                ),
            );
            para.set_indent_left(720);
        }
        self.clause(
            "If any residuary beneficiary does not survive me, that beneficiary's share shall \
             be divided among the surviving residuary beneficiaries in proportion to their \
             shares."
                .to_string(),
        );
    }

    fn general_provisions(&mut self) {
        self.clause(
            "A. Simultaneous Death. If any beneficiary and I die under circumstances in which \
             the order of our deaths cannot be established, I shall be deemed to have survived \
             that beneficiary."
                .to_string(),
        );
        self.clause(
            "B. Taxes. All estate and inheritance taxes payable by reason of my death shall be \
             paid out of the residue of my estate without apportionment."
                .to_string(),
        );
        self.clause(
            "C. Severability. If any provision of this Will is held invalid or unenforceable, \
             the remaining provisions shall continue in full force and effect."
                .to_string(),
        );
    }

    fn signature_block(&mut self) {
        let testator = self.will.testator_name.trim().to_string();
        self.doc
            .add_text(
                StyleId::Clause,
                format!(
                    "IN WITNESS WHEREOF, I have signed this Will on {}, 20____, at {}.",
                    BLANK, BLANK
                ),
            )
            .keep_with_next();
        self.doc.add_text(StyleId::Signature, SIGNATURE_LINE);
        self.doc.add_text(StyleId::Clause, format!("{}, Testator", testator));
    }

    fn attestation(&mut self) {
        let will = self.will;
        let testator = will.testator_name.trim();
        self.doc.add_text(StyleId::Heading1, "ATTESTATION");
        self.clause(format!(
            "The foregoing instrument was signed and declared by {} to be the Testator's Last \
             Will and Testament in our presence. At the Testator's request, in the Testator's \
             presence, and in the presence of each other, we have signed our names below as \
             witnesses.",
            testator
        ));

        for (i, witness) in will.witnesses.iter().enumerate() {
            let name = match witness.trim() {
                "" => format!("Witness {} Name", i + 1),
                name => name.to_string(),
            };
            self.doc.add_text(StyleId::Signature, SIGNATURE_LINE);
            self.doc
                .add_text(StyleId::Clause, format!("Name: {}", name))
                .keep_with_next();
            self.doc
                .add_text(StyleId::Clause, format!("Address: {}", SIGNATURE_LINE));
        }
    }

    fn affidavit(&mut self) {
        let testator = self.will.testator_name.trim().to_string();
        self.doc
            .add_text(StyleId::Heading1, "SELF-PROVING AFFIDAVIT")
            .page_break_before();
        self.clause(format!("STATE OF {}", BLANK));
        self.clause(format!("COUNTY OF {}", BLANK));
        self.clause(format!(
            "Subscribed, sworn to, and acknowledged before me by {}, the Testator, and \
             subscribed and sworn to before me by the above witnesses, this ______ day of {}, \
             20____.",
            testator, BLANK
        ));
        self.doc.add_text(StyleId::Signature, SIGNATURE_LINE);
        self.doc
            .add_text(StyleId::Clause, "Notary Public")
            .set_alignment(ParagraphAlignment::Left);
        self.clause(format!("My commission expires: {}", BLANK));
    }
}

/// Build the document body for `will`.
pub fn build_document(will: &WillInput, sample: bool) -> Document {
    WillDocumentBuilder::new(will, sample).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Document, style: StyleId) -> Vec<String> {
        doc.paragraphs_with_style(style).map(|p| p.text()).collect()
    }

    fn jane() -> WillInput {
        WillInput::new("Jane A. Doe", "John Smith")
            .with_gift("Alice", "My Car")
            .with_residuary("Bob", 100.0)
            .with_witness("W1")
            .with_witness("W2")
    }

    #[test]
    fn test_article_headings() {
        let doc = build_document(&jane(), false);
        let headings = texts(&doc, StyleId::Heading1);
        assert_eq!(
            headings,
            vec![
                "ARTICLE I: DECLARATION",
                "ARTICLE II: EXECUTOR",
                "ARTICLE III: SPECIFIC GIFTS",
                "ARTICLE IV: RESIDUARY ESTATE",
                "ARTICLE V: GENERAL PROVISIONS",
                "ATTESTATION",
                "SELF-PROVING AFFIDAVIT",
            ]
        );
    }

    #[test]
    fn test_gift_and_residuary_clauses() {
        let clauses = texts(&build_document(&jane(), false), StyleId::Clause);
        assert!(clauses.contains(
            &"1. I give and bequeath My Car to Alice, if he/she survives me.".to_string()
        ));
        assert!(clauses.contains(&"1. 100% to Bob, if he/she survives me.".to_string()));
    }

    #[test]
    fn test_fractional_percentage() {
        let will = WillInput::new("Jane", "John")
            .with_residuary("Bob", 33.5)
            .with_residuary("Carol", 66.5);
        let clauses = texts(&build_document(&will, false), StyleId::Clause);
        assert!(clauses.contains(&"1. 33.5% to Bob, if he/she survives me.".to_string()));
        assert!(clauses.contains(&"2. 66.5% to Carol, if he/she survives me.".to_string()));
    }

    #[test]
    fn test_alternates_only_when_named() {
        let plain = texts(&build_document(&jane(), false), StyleId::Clause).join("\n");
        assert!(!plain.contains("alternate Executor"));

        let will = jane()
            .with_alternate_executor("Mary")
            .with_guardian("Gina")
            .with_alternate_guardian("Hal");
        let doc = build_document(&will, false);
        let text = texts(&doc, StyleId::Clause).join("\n");
        assert!(text.contains("I appoint Mary as alternate Executor."));
        assert!(text.contains("I appoint Gina as Guardian"));
        assert!(text.contains("I appoint Hal as alternate Guardian."));
        assert!(texts(&doc, StyleId::Heading1).contains(&"ARTICLE III: GUARDIAN".to_string()));
    }

    #[test]
    fn test_alternate_guardian_without_guardian() {
        let will = jane().with_alternate_guardian("Hal");
        let doc = build_document(&will, false);
        let headings = texts(&doc, StyleId::Heading1);
        assert!(!headings.iter().any(|h| h.ends_with(": GUARDIAN")));
        assert_eq!(headings[2], "ARTICLE III: SPECIFIC GIFTS");

        let text = texts(&doc, StyleId::Clause).join("\n");
        assert!(!text.contains("alternate Guardian"));
        assert!(!text.contains("Hal"));
    }

    #[test]
    fn test_headings_follow_plan_positions() {
        let will = jane().with_guardian("Gina");
        let headings = texts(&build_document(&will, false), StyleId::Heading1);
        assert_eq!(
            &headings[..6],
            [
                "ARTICLE I: DECLARATION",
                "ARTICLE II: EXECUTOR",
                "ARTICLE III: GUARDIAN",
                "ARTICLE IV: SPECIFIC GIFTS",
                "ARTICLE V: RESIDUARY ESTATE",
                "ARTICLE VI: GENERAL PROVISIONS",
            ]
        );
    }

    #[test]
    fn test_formatting_comes_from_styles() {
        let will = jane().with_guardian("Gina");
        let xml = build_document(&will, true).to_xml().unwrap();
        assert!(!xml.contains("<w:rPr>"));
        assert!(!xml.contains("<w:spacing"));
        assert!(!xml.contains(r#"<w:jc w:val="right"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    }

    #[test]
    fn test_witness_placeholders() {
        let will = WillInput::new("Jane", "John")
            .with_witness("")
            .with_witness("Wanda")
            .with_witness("  ");
        let names: Vec<String> = texts(&build_document(&will, false), StyleId::Clause)
            .into_iter()
            .filter(|t| t.starts_with("Name: "))
            .collect();
        assert_eq!(
            names,
            vec!["Name: Witness 1 Name", "Name: Wanda", "Name: Witness 3 Name"]
        );
    }

    #[test]
    fn test_sample_markers() {
        let doc = build_document(&jane(), true);
        let first = &doc.paragraphs()[0];
        assert_eq!(first.style(), Some(StyleId::Watermark));
        assert_eq!(first.text(), WATERMARK_TEXT);
        assert_eq!(doc.paragraphs()[1].style(), Some(StyleId::Title));
        assert_eq!(texts(&doc, StyleId::Notice), vec![SAMPLE_NOTICE]);

        let plain = build_document(&jane(), false);
        assert_eq!(plain.paragraphs_with_style(StyleId::Watermark).count(), 0);
        assert_eq!(plain.paragraphs_with_style(StyleId::Notice).count(), 0);
    }

    #[test]
    fn test_notice_precedes_signature_block() {
        let doc = build_document(&jane(), true);
        let paragraphs = doc.paragraphs();
        let notice = paragraphs
            .iter()
            .position(|p| p.style() == Some(StyleId::Notice))
            .unwrap();
        let signature = paragraphs
            .iter()
            .position(|p| p.text().starts_with("IN WITNESS WHEREOF"))
            .unwrap();
        assert_eq!(notice + 1, signature);
    }
}
