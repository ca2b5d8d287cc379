//! Form payloads submitted by operators.
//!
//! Stage forms implement [`Transition`]: they name the stage they complete
//! and the field values they own. The completion stamp is added by the
//! executor, not by the form. Indent forms implement [`IndentForm`] and
//! produce a whole new row.

use super::amount::{amount_due, format_optional_amount};
use super::error::{WorkflowDomainError, require, require_amount};
use super::layouts::{ledger, repair, service};
use super::pipeline::{PipelineStage, RepairStage, ServiceStage};
use super::record::TaskRecord;
use super::schema::{FieldName, SheetKind};
use crate::sheet::domain::FileUpload;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Payment type that carries an advance.
pub const ADVANCE_PAYMENT_TYPE: &str = "Advance";

/// Bill match flag recorded for a freshly paid ledger entry.
pub const UNMATCHED_BILL: &str = "No";

/// A form completing one pipeline stage.
pub trait Transition: Send + Sync {
    /// Pipeline the stage belongs to.
    type Stage: PipelineStage;

    /// Stage completed by this form.
    fn stage(&self) -> Self::Stage;

    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError`] for missing or malformed values.
    fn validate(&self) -> Result<(), WorkflowDomainError> {
        Ok(())
    }

    /// Column receiving the attachment reference, when the stage has one.
    fn attachment_field(&self) -> Option<FieldName> {
        None
    }

    /// File to upload into [`Self::attachment_field`].
    fn attachment(&self) -> Option<&FileUpload> {
        None
    }

    /// Values owned by this stage, excluding the completion stamp.
    ///
    /// `attachment_url` is the reference to write into the attachment
    /// column, or `""`.
    fn field_values(&self, record: &TaskRecord, attachment_url: &str) -> Vec<(FieldName, String)>;
}

/// A form creating a new row.
pub trait IndentForm: Send + Sync {
    /// Sheet receiving the row.
    fn sheet(&self) -> SheetKind;

    /// Checks required fields.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowDomainError`] for missing or malformed values.
    fn validate(&self) -> Result<(), WorkflowDomainError>;

    /// Files to upload before the insert, keyed by the field receiving the
    /// reference.
    fn attachments(&self) -> Vec<(FieldName, &FileUpload)>;

    /// Field values of the new row.
    ///
    /// `urls` maps attachment fields to uploaded references.
    fn field_values(
        &self,
        timestamp: &str,
        urls: &BTreeMap<FieldName, String>,
    ) -> Vec<(FieldName, String)>;
}

/// Machine sent to the vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchForm {
    vendor_name: String,
    lead_time_days: String,
    transporter_name: String,
    transportation_charges: String,
    weighment_slip: String,
    payment_type: String,
    advance_amount: String,
    transporting_image: Option<FileUpload>,
}

impl DispatchForm {
    /// Creates a dispatch form with its required fields.
    #[must_use]
    pub fn new(vendor_name: impl Into<String>, payment_type: impl Into<String>) -> Self {
        Self {
            vendor_name: vendor_name.into(),
            lead_time_days: String::new(),
            transporter_name: String::new(),
            transportation_charges: String::new(),
            weighment_slip: String::new(),
            payment_type: payment_type.into(),
            advance_amount: String::new(),
            transporting_image: None,
        }
    }

    /// Sets the promised lead time in days.
    #[must_use]
    pub fn with_lead_time_days(mut self, days: impl Into<String>) -> Self {
        self.lead_time_days = days.into();
        self
    }

    /// Sets the transporter and charges.
    #[must_use]
    pub fn with_transport(mut self, name: impl Into<String>, charges: impl Into<String>) -> Self {
        self.transporter_name = name.into();
        self.transportation_charges = charges.into();
        self
    }

    /// Sets the weighment slip.
    #[must_use]
    pub fn with_weighment_slip(mut self, slip: impl Into<String>) -> Self {
        self.weighment_slip = slip.into();
        self
    }

    /// Sets the advance; only written for advance payments.
    #[must_use]
    pub fn with_advance_amount(mut self, amount: impl Into<String>) -> Self {
        self.advance_amount = amount.into();
        self
    }

    /// Attaches the transport image.
    #[must_use]
    pub fn with_transporting_image(mut self, image: FileUpload) -> Self {
        self.transporting_image = Some(image);
        self
    }

    fn is_advance(&self) -> bool {
        self.payment_type.trim() == ADVANCE_PAYMENT_TYPE
    }
}

impl Transition for DispatchForm {
    type Stage = RepairStage;

    fn stage(&self) -> RepairStage {
        RepairStage::Dispatch
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(repair::VENDOR_NAME, &self.vendor_name)?;
        require(repair::PAYMENT_TYPE, &self.payment_type)?;
        if self.is_advance() {
            require_amount(repair::ADVANCE_AMOUNT, &self.advance_amount)?;
        }
        Ok(())
    }

    fn attachment_field(&self) -> Option<FieldName> {
        Some(repair::TRANSPORTING_IMAGE)
    }

    fn attachment(&self) -> Option<&FileUpload> {
        self.transporting_image.as_ref()
    }

    fn field_values(&self, _record: &TaskRecord, attachment_url: &str) -> Vec<(FieldName, String)> {
        let advance = if self.is_advance() {
            self.advance_amount.clone()
        } else {
            String::new()
        };
        vec![
            (repair::VENDOR_NAME, self.vendor_name.clone()),
            (repair::LEAD_TIME_DAYS, self.lead_time_days.clone()),
            (repair::TRANSPORTER_NAME, self.transporter_name.clone()),
            (repair::TRANSPORTATION_CHARGES, self.transportation_charges.clone()),
            (repair::WEIGHMENT_SLIP, self.weighment_slip.clone()),
            (repair::TRANSPORTING_IMAGE, attachment_url.to_owned()),
            (repair::PAYMENT_TYPE, self.payment_type.clone()),
            (repair::ADVANCE_AMOUNT, advance),
        ]
    }
}

/// Machine and bill checked on return from the vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationForm {
    bill_transporter_name: String,
    transportation_amount: String,
    bill_no: String,
    bill_type: String,
    total_bill_amount: String,
    bill_image: Option<FileUpload>,
}

impl VerificationForm {
    /// Creates a verification form with its required fields.
    #[must_use]
    pub fn new(bill_no: impl Into<String>, total_bill_amount: impl Into<String>) -> Self {
        Self {
            bill_transporter_name: String::new(),
            transportation_amount: String::new(),
            bill_no: bill_no.into(),
            bill_type: String::new(),
            total_bill_amount: total_bill_amount.into(),
            bill_image: None,
        }
    }

    /// Sets the return transporter and amount.
    #[must_use]
    pub fn with_transport(mut self, name: impl Into<String>, amount: impl Into<String>) -> Self {
        self.bill_transporter_name = name.into();
        self.transportation_amount = amount.into();
        self
    }

    /// Sets the bill type.
    #[must_use]
    pub fn with_bill_type(mut self, bill_type: impl Into<String>) -> Self {
        self.bill_type = bill_type.into();
        self
    }

    /// Attaches the bill image.
    #[must_use]
    pub fn with_bill_image(mut self, image: FileUpload) -> Self {
        self.bill_image = Some(image);
        self
    }
}

impl Transition for VerificationForm {
    type Stage = RepairStage;

    fn stage(&self) -> RepairStage {
        RepairStage::Verification
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(repair::BILL_NO, &self.bill_no)?;
        require_amount(repair::TOTAL_BILL_AMOUNT, &self.total_bill_amount)
    }

    fn attachment_field(&self) -> Option<FieldName> {
        Some(repair::BILL_IMAGE)
    }

    fn attachment(&self) -> Option<&FileUpload> {
        self.bill_image.as_ref()
    }

    fn field_values(&self, record: &TaskRecord, attachment_url: &str) -> Vec<(FieldName, String)> {
        let due = amount_due(&self.total_bill_amount, record.get(repair::ADVANCE_AMOUNT));
        vec![
            (repair::BILL_TRANSPORTER_NAME, self.bill_transporter_name.clone()),
            (repair::BILL_TRANSPORTATION_AMOUNT, self.transportation_amount.clone()),
            (repair::BILL_IMAGE, attachment_url.to_owned()),
            (repair::BILL_NO, self.bill_no.clone()),
            (repair::BILL_TYPE, self.bill_type.clone()),
            (repair::TOTAL_BILL_AMOUNT, self.total_bill_amount.clone()),
            (repair::AMOUNT_DUE, format_optional_amount(due)),
        ]
    }
}

/// Machine received into store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageForm {
    received_quantity: String,
    bill_match: bool,
    product_image: Option<FileUpload>,
}

impl StorageForm {
    /// Creates a storage form.
    #[must_use]
    pub fn new(received_quantity: impl Into<String>, bill_match: bool) -> Self {
        Self {
            received_quantity: received_quantity.into(),
            bill_match,
            product_image: None,
        }
    }

    /// Attaches the product image.
    #[must_use]
    pub fn with_product_image(mut self, image: FileUpload) -> Self {
        self.product_image = Some(image);
        self
    }
}

impl Transition for StorageForm {
    type Stage = RepairStage;

    fn stage(&self) -> RepairStage {
        RepairStage::Storage
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(repair::RECEIVED_QUANTITY, &self.received_quantity)
    }

    fn attachment_field(&self) -> Option<FieldName> {
        Some(repair::PRODUCT_IMAGE)
    }

    fn attachment(&self) -> Option<&FileUpload> {
        self.product_image.as_ref()
    }

    fn field_values(&self, _record: &TaskRecord, attachment_url: &str) -> Vec<(FieldName, String)> {
        vec![
            (repair::RECEIVED_QUANTITY, self.received_quantity.clone()),
            (repair::BILL_MATCH, yes_no(self.bill_match).to_owned()),
            (repair::PRODUCT_IMAGE, attachment_url.to_owned()),
        ]
    }
}

/// Final vendor payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    payment_type: String,
    total_bill_amount: String,
    amount_to_pay: String,
}

impl PaymentForm {
    /// Creates a payment form.
    #[must_use]
    pub fn new(
        payment_type: impl Into<String>,
        total_bill_amount: impl Into<String>,
        amount_to_pay: impl Into<String>,
    ) -> Self {
        Self {
            payment_type: payment_type.into(),
            total_bill_amount: total_bill_amount.into(),
            amount_to_pay: amount_to_pay.into(),
        }
    }

    /// Prefills the form from a repair record.
    ///
    /// The final payment type falls back to the dispatch payment type and the
    /// amount to pay falls back to the amount due.
    #[must_use]
    pub fn prefilled(record: &TaskRecord) -> Self {
        Self::new(
            record.first_present(&[repair::FINAL_PAYMENT_TYPE, repair::PAYMENT_TYPE]),
            record.get(repair::TOTAL_BILL_AMOUNT),
            record.first_present(&[repair::AMOUNT_PAID, repair::AMOUNT_DUE]),
        )
    }

    /// Returns the payment type.
    #[must_use]
    pub fn payment_type(&self) -> &str {
        &self.payment_type
    }

    /// Returns the amount to pay.
    #[must_use]
    pub fn amount_to_pay(&self) -> &str {
        &self.amount_to_pay
    }

    /// Values of the ledger row recording this payment.
    #[must_use]
    pub fn ledger_values(
        &self,
        record: &TaskRecord,
        payment_no: &str,
        timestamp: &str,
    ) -> Vec<(FieldName, String)> {
        vec![
            (ledger::TIMESTAMP, timestamp.to_owned()),
            (ledger::PAYMENT_NO, payment_no.to_owned()),
            (ledger::REPAIR_TASK_NO, record.get(repair::TASK_NO).to_owned()),
            (ledger::SERIAL_NO, record.get(repair::SERIAL_NO).to_owned()),
            (ledger::MACHINE_NAME, record.get(repair::MACHINE_NAME).to_owned()),
            (ledger::VENDOR_NAME, record.get(repair::VENDOR_NAME).to_owned()),
            (ledger::BILL_NO, record.get(repair::BILL_NO).to_owned()),
            (ledger::TOTAL_BILL_AMOUNT, self.total_bill_amount.clone()),
            (ledger::PAYMENT_TYPE, self.payment_type.clone()),
            (ledger::TO_BE_PAID_AMOUNT, self.amount_to_pay.clone()),
        ]
    }
}

impl Transition for PaymentForm {
    type Stage = RepairStage;

    fn stage(&self) -> RepairStage {
        RepairStage::Payment
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(repair::FINAL_PAYMENT_TYPE, &self.payment_type)?;
        require_amount(repair::AMOUNT_PAID, &self.amount_to_pay)
    }

    fn field_values(&self, _record: &TaskRecord, _attachment_url: &str) -> Vec<(FieldName, String)> {
        vec![
            (repair::FINAL_PAYMENT_TYPE, self.payment_type.clone()),
            (repair::AMOUNT_PAID, self.amount_to_pay.clone()),
        ]
    }
}

/// External parts sourced for a service ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPartsForm {
    parts_name: String,
    amount: String,
    remarks: String,
    bill_copy: Option<FileUpload>,
}

impl ExternalPartsForm {
    /// Creates an external parts form.
    #[must_use]
    pub fn new(parts_name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            parts_name: parts_name.into(),
            amount: amount.into(),
            remarks: String::new(),
            bill_copy: None,
        }
    }

    /// Sets remarks.
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Attaches the parts bill copy.
    #[must_use]
    pub fn with_bill_copy(mut self, file: FileUpload) -> Self {
        self.bill_copy = Some(file);
        self
    }
}

impl Transition for ExternalPartsForm {
    type Stage = ServiceStage;

    fn stage(&self) -> ServiceStage {
        ServiceStage::ExternalParts
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(service::PARTS_NAME, &self.parts_name)
    }

    fn attachment_field(&self) -> Option<FieldName> {
        Some(service::PARTS_BILL_COPY)
    }

    fn attachment(&self) -> Option<&FileUpload> {
        self.bill_copy.as_ref()
    }

    fn field_values(&self, _record: &TaskRecord, attachment_url: &str) -> Vec<(FieldName, String)> {
        vec![
            (service::PARTS_NAME, self.parts_name.clone()),
            (service::PARTS_AMOUNT, self.amount.clone()),
            (service::PARTS_BILL_COPY, attachment_url.to_owned()),
            (service::PARTS_REMARKS, self.remarks.clone()),
        ]
    }
}

/// Outcome of a payment approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalDecision {
    /// Payment approved.
    Approved,
    /// Payment rejected.
    Rejected,
}

impl ApprovalDecision {
    /// Returns the sheet label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for ApprovalDecision {
    type Err = WorkflowDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approved" | "approve" => Ok(Self::Approved),
            "rejected" | "reject" => Ok(Self::Rejected),
            _ => Err(WorkflowDomainError::UnknownDecision(value.to_owned())),
        }
    }
}

/// Payment approval for a service ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalForm {
    decision: ApprovalDecision,
}

impl ApprovalForm {
    /// Creates an approval form.
    #[must_use]
    pub const fn new(decision: ApprovalDecision) -> Self {
        Self { decision }
    }
}

impl Transition for ApprovalForm {
    type Stage = ServiceStage;

    fn stage(&self) -> ServiceStage {
        ServiceStage::PaymentApproval
    }

    fn field_values(&self, _record: &TaskRecord, _attachment_url: &str) -> Vec<(FieldName, String)> {
        vec![(service::APPROVAL_STATUS, self.decision.as_str().to_owned())]
    }
}

/// Tally entry for a service ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyForm {
    remarks: String,
}

impl TallyForm {
    /// Creates a tally form.
    #[must_use]
    pub fn new(remarks: impl Into<String>) -> Self {
        Self {
            remarks: remarks.into(),
        }
    }
}

impl Transition for TallyForm {
    type Stage = ServiceStage;

    fn stage(&self) -> ServiceStage {
        ServiceStage::TallyEntry
    }

    fn field_values(&self, _record: &TaskRecord, _attachment_url: &str) -> Vec<(FieldName, String)> {
        vec![(service::TALLY_REMARKS, self.remarks.clone())]
    }
}

/// New repair request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairIndentForm {
    serial_no: String,
    machine_name: String,
    machine_part_name: String,
    given_by: String,
    doer_name: String,
    problem: String,
    enable_reminder: bool,
    require_attachment: bool,
    task_start_date: String,
    task_end_date: String,
    priority: String,
    department: String,
    location: String,
    image: Option<FileUpload>,
}

impl RepairIndentForm {
    /// Creates a repair indent with its required fields.
    #[must_use]
    pub fn new(
        machine_name: impl Into<String>,
        given_by: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self {
            serial_no: String::new(),
            machine_name: machine_name.into(),
            machine_part_name: String::new(),
            given_by: given_by.into(),
            doer_name: String::new(),
            problem: problem.into(),
            enable_reminder: false,
            require_attachment: false,
            task_start_date: String::new(),
            task_end_date: String::new(),
            priority: String::new(),
            department: String::new(),
            location: String::new(),
            image: None,
        }
    }

    /// Sets the machine serial number and part.
    #[must_use]
    pub fn with_machine_details(
        mut self,
        serial_no: impl Into<String>,
        part_name: impl Into<String>,
    ) -> Self {
        self.serial_no = serial_no.into();
        self.machine_part_name = part_name.into();
        self
    }

    /// Sets the doer.
    #[must_use]
    pub fn with_doer(mut self, doer_name: impl Into<String>) -> Self {
        self.doer_name = doer_name.into();
        self
    }

    /// Sets the reminder and attachment flags.
    #[must_use]
    pub const fn with_flags(mut self, enable_reminder: bool, require_attachment: bool) -> Self {
        self.enable_reminder = enable_reminder;
        self.require_attachment = require_attachment;
        self
    }

    /// Sets the planned task window.
    #[must_use]
    pub fn with_schedule(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.task_start_date = start.into();
        self.task_end_date = end.into();
        self
    }

    /// Sets priority, department and location.
    #[must_use]
    pub fn with_routing(
        mut self,
        priority: impl Into<String>,
        department: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        self.priority = priority.into();
        self.department = department.into();
        self.location = location.into();
        self
    }

    /// Attaches an image of the fault.
    #[must_use]
    pub fn with_image(mut self, image: FileUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl IndentForm for RepairIndentForm {
    fn sheet(&self) -> SheetKind {
        SheetKind::RepairSystem
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(repair::MACHINE_NAME, &self.machine_name)?;
        require(repair::GIVEN_BY, &self.given_by)?;
        require(repair::PROBLEM, &self.problem)
    }

    fn attachments(&self) -> Vec<(FieldName, &FileUpload)> {
        self.image
            .iter()
            .map(|image| (repair::IMAGE_URL, image))
            .collect()
    }

    fn field_values(
        &self,
        timestamp: &str,
        urls: &BTreeMap<FieldName, String>,
    ) -> Vec<(FieldName, String)> {
        vec![
            (repair::TIMESTAMP, timestamp.to_owned()),
            (repair::TASK_NO, String::new()),
            (repair::SERIAL_NO, self.serial_no.clone()),
            (repair::MACHINE_NAME, self.machine_name.clone()),
            (repair::MACHINE_PART_NAME, self.machine_part_name.clone()),
            (repair::GIVEN_BY, self.given_by.clone()),
            (repair::DOER_NAME, self.doer_name.clone()),
            (repair::PROBLEM, self.problem.clone()),
            (repair::ENABLE_REMINDER, yes_no(self.enable_reminder).to_owned()),
            (repair::REQUIRE_ATTACHMENT, yes_no(self.require_attachment).to_owned()),
            (repair::TASK_START_DATE, self.task_start_date.clone()),
            (repair::TASK_END_DATE, self.task_end_date.clone()),
            (repair::PRIORITY, self.priority.clone()),
            (repair::DEPARTMENT, self.department.clone()),
            (repair::LOCATION, self.location.clone()),
            (repair::IMAGE_URL, url_for(urls, repair::IMAGE_URL)),
        ]
    }
}

/// New service ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIndentForm {
    service_checker: String,
    machine_name: String,
    vendor_name: String,
    work_description: String,
    service_location: String,
    remarks: String,
    quotation: bool,
    total_amount: String,
    tds_deduction_amount: String,
    bill_copy: Option<FileUpload>,
    quotation_image: Option<FileUpload>,
}

impl ServiceIndentForm {
    /// Creates a service indent with its required fields.
    #[must_use]
    pub fn new(
        service_checker: impl Into<String>,
        machine_name: impl Into<String>,
        vendor_name: impl Into<String>,
        work_description: impl Into<String>,
    ) -> Self {
        Self {
            service_checker: service_checker.into(),
            machine_name: machine_name.into(),
            vendor_name: vendor_name.into(),
            work_description: work_description.into(),
            service_location: String::new(),
            remarks: String::new(),
            quotation: false,
            total_amount: String::new(),
            tds_deduction_amount: String::new(),
            bill_copy: None,
            quotation_image: None,
        }
    }

    /// Sets the service location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.service_location = location.into();
        self
    }

    /// Sets remarks.
    #[must_use]
    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    /// Sets the total and TDS deduction.
    #[must_use]
    pub fn with_amounts(mut self, total: impl Into<String>, tds: impl Into<String>) -> Self {
        self.total_amount = total.into();
        self.tds_deduction_amount = tds.into();
        self
    }

    /// Attaches the bill copy.
    #[must_use]
    pub fn with_bill_copy(mut self, file: FileUpload) -> Self {
        self.bill_copy = Some(file);
        self
    }

    /// Marks a quotation as obtained, optionally with its image.
    #[must_use]
    pub fn with_quotation(mut self, image: Option<FileUpload>) -> Self {
        self.quotation = true;
        self.quotation_image = image;
        self
    }
}

impl IndentForm for ServiceIndentForm {
    fn sheet(&self) -> SheetKind {
        SheetKind::Service
    }

    fn validate(&self) -> Result<(), WorkflowDomainError> {
        require(service::SERVICE_CHECKER, &self.service_checker)?;
        require(service::MACHINE_NAME, &self.machine_name)?;
        require(service::VENDOR_NAME, &self.vendor_name)?;
        require(service::WORK_DESCRIPTION, &self.work_description)
    }

    fn attachments(&self) -> Vec<(FieldName, &FileUpload)> {
        let quotation_image = self
            .quotation_image
            .iter()
            .filter(|_| self.quotation)
            .map(|file| (service::QUOTATION_IMAGE, file));
        self.bill_copy
            .iter()
            .map(|file| (service::BILL_COPY_IMAGE, file))
            .chain(quotation_image)
            .collect()
    }

    fn field_values(
        &self,
        timestamp: &str,
        urls: &BTreeMap<FieldName, String>,
    ) -> Vec<(FieldName, String)> {
        let quotation_image = if self.quotation {
            url_for(urls, service::QUOTATION_IMAGE)
        } else {
            String::new()
        };
        vec![
            (service::TIMESTAMP, timestamp.to_owned()),
            (service::SERVICE_NO, String::new()),
            (service::SERVICE_CHECKER, self.service_checker.clone()),
            (service::MACHINE_NAME, self.machine_name.clone()),
            (service::VENDOR_NAME, self.vendor_name.clone()),
            (service::WORK_DESCRIPTION, self.work_description.clone()),
            (service::SERVICE_LOCATION, self.service_location.clone()),
            (service::BILL_COPY_IMAGE, url_for(urls, service::BILL_COPY_IMAGE)),
            (service::REMARKS, self.remarks.clone()),
            (service::QUOTATION, yes_no(self.quotation).to_owned()),
            (service::QUOTATION_IMAGE, quotation_image),
            (service::TOTAL_AMOUNT, self.total_amount.clone()),
            (service::TDS_DEDUCTION_AMOUNT, self.tds_deduction_amount.clone()),
        ]
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn url_for(urls: &BTreeMap<FieldName, String>, field: FieldName) -> String {
    urls.get(&field).cloned().unwrap_or_default()
}
