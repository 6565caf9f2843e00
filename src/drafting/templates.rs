// src/drafting/templates.rs
use chrono::NaiveDate;

use super::DocumentType;
use crate::extractors::ExtractedFields;

const BEQUEST_PLACEHOLDER: &str = "[Describe how you want your assets distributed]";

/// Renders the skeleton for `document_type`. Every section header is always
/// present; fields the extractor could not fill carry their placeholders.
pub fn compose(document_type: DocumentType, fields: &ExtractedFields, current_date: NaiveDate) -> String {
    let date = current_date.format("%B %d, %Y").to_string();
    tracing::debug!(?document_type, %date, "Composing document");

    match document_type {
        DocumentType::Nda => nda(fields, &date),
        DocumentType::ServiceContract => service_contract(fields, &date),
        DocumentType::Will => will(fields, &date),
    }
}

fn nda(fields: &ExtractedFields, date: &str) -> String {
    let ExtractedFields { party_a, party_b, protected_subject, purpose_clause, .. } = fields;
    let term = fields.duration_text();

    format!(
        r#"NON-DISCLOSURE AGREEMENT

This Agreement ("Agreement") is made and entered into as of {date} by and between:

1. {party_a} ("Disclosing Party"); and
2. {party_b} ("Receiving Party").

WHEREAS, the Parties wish to explore a potential business relationship; and
WHEREAS, the Disclosing Party possesses certain {protected_subject} that it may disclose to the Receiving Party;

NOW THEREFORE, in consideration of the mutual promises and covenants contained herein, the Parties agree as follows:

1. DEFINITION OF CONFIDENTIAL INFORMATION
1.1 "Confidential Information" means all information disclosed by Disclosing Party to Receiving Party, including but not limited to {protected_subject}.

2. OBLIGATIONS
2.1 Receiving Party shall:
   (a) Maintain all Confidential Information in strict confidence;
   (b) Not disclose Confidential Information to any third party;
   (c) Use Confidential Information solely for the purpose of {purpose_clause}.

3. TERM
3.1 This Agreement shall remain in effect for {term}.

4. GENERAL PROVISIONS
4.1 Governing Law: This Agreement shall be governed by the laws of [State/Country].
4.2 Entire Agreement: This Agreement constitutes the entire understanding between the Parties.

IN WITNESS WHEREOF, the Parties have executed this Agreement as of the date first written above.

___________________________          ___________________________
{party_a}                             {party_b}
"#
    )
}

fn service_contract(fields: &ExtractedFields, date: &str) -> String {
    let ExtractedFields { party_a, party_b, services_clause, .. } = fields;
    let term = fields.duration_text();

    format!(
        r#"SERVICE CONTRACT AGREEMENT

This Service Contract ("Contract") is made and entered into as of {date} by and between:

1. {party_a} ("Service Provider"); and
2. {party_b} ("Client").

1. SERVICES
1.1 Service Provider agrees to provide the following services: {services_clause}

2. COMPENSATION
2.1 Client agrees to pay Service Provider as follows: [Payment terms to be specified]

3. TERM AND TERMINATION
3.1 This Contract shall commence on {date} and continue for {term}.

4. GENERAL PROVISIONS
4.1 Independent Contractor: Service Provider is an independent contractor.
4.2 Governing Law: This Contract shall be governed by the laws of [State/Country].

IN WITNESS WHEREOF, the Parties have executed this Contract as of the date first written above.

___________________________          ___________________________
{party_a}                             {party_b}
"#
    )
}

fn will(fields: &ExtractedFields, date: &str) -> String {
    let testator = &fields.party_a;
    let bequest = fields.bequest.as_deref().unwrap_or(BEQUEST_PLACEHOLDER);

    format!(
        r#"LAST WILL AND TESTAMENT

I, {testator}, residing at [Your Address], being of sound mind and memory, declare this to be my Last Will and Testament.

1. REVOCATION
1.1 I revoke all prior wills and codicils.

2. EXECUTOR
2.1 I appoint [Executor Name] as Executor of this Will.

3. BENEFICIARIES
3.1 I give, devise, and bequeath my estate as follows:
   {bequest}

4. RESIDUARY ESTATE
4.1 All the rest, residue, and remainder of my estate I give to [Beneficiary Name].

IN WITNESS WHEREOF, I have signed this Will on {date}.

___________________________
Testator

WITNESSES:

1. ___________________________
   Name: _____________________
   Address: __________________

2. ___________________________
   Name: _____________________
   Address: __________________
"#
    )
}
