//! Column layouts of the deployed workbook.
//!
//! Indices are 0-based read-side positions. Bumping a layout means bumping
//! the schema version alongside the column table.

use super::schema::{ColumnSpec, FieldName, SheetKind, SheetSchema};

/// Fields of the `Repair System` sheet.
pub mod repair {
    use super::FieldName;

    /// Indent timestamp.
    pub const TIMESTAMP: FieldName = FieldName::new("timestamp");
    /// Ticket number assigned by the sheet.
    pub const TASK_NO: FieldName = FieldName::new("task_no");
    /// Machine serial number.
    pub const SERIAL_NO: FieldName = FieldName::new("serial_no");
    /// Machine name.
    pub const MACHINE_NAME: FieldName = FieldName::new("machine_name");
    /// Part under repair.
    pub const MACHINE_PART_NAME: FieldName = FieldName::new("machine_part_name");
    /// Requester; owns the record.
    pub const GIVEN_BY: FieldName = FieldName::new("given_by");
    /// Person doing the repair.
    pub const DOER_NAME: FieldName = FieldName::new("doer_name");
    /// Problem description.
    pub const PROBLEM: FieldName = FieldName::new("problem");
    /// Reminder flag.
    pub const ENABLE_REMINDER: FieldName = FieldName::new("enable_reminder");
    /// Attachment-required flag.
    pub const REQUIRE_ATTACHMENT: FieldName = FieldName::new("require_attachment");
    /// Task start date.
    pub const TASK_START_DATE: FieldName = FieldName::new("task_start_date");
    /// Task end date.
    pub const TASK_END_DATE: FieldName = FieldName::new("task_end_date");
    /// Priority label.
    pub const PRIORITY: FieldName = FieldName::new("priority");
    /// Requesting department.
    pub const DEPARTMENT: FieldName = FieldName::new("department");
    /// Machine location.
    pub const LOCATION: FieldName = FieldName::new("location");
    /// Indent image reference.
    pub const IMAGE_URL: FieldName = FieldName::new("image_url");
    /// Dispatch planned date.
    pub const DISPATCH_PLANNED: FieldName = FieldName::new("dispatch_planned");
    /// Dispatch completion stamp.
    pub const DISPATCH_ACTUAL: FieldName = FieldName::new("dispatch_actual");
    /// Dispatch delay, computed by the sheet.
    pub const DISPATCH_DELAY: FieldName = FieldName::new("dispatch_delay");
    /// Repair vendor.
    pub const VENDOR_NAME: FieldName = FieldName::new("vendor_name");
    /// Promised lead time in days.
    pub const LEAD_TIME_DAYS: FieldName = FieldName::new("lead_time_days");
    /// Outbound transporter.
    pub const TRANSPORTER_NAME: FieldName = FieldName::new("transporter_name");
    /// Outbound transportation charges.
    pub const TRANSPORTATION_CHARGES: FieldName = FieldName::new("transportation_charges");
    /// Weighment slip reference.
    pub const WEIGHMENT_SLIP: FieldName = FieldName::new("weighment_slip");
    /// Image of the machine in transit.
    pub const TRANSPORTING_IMAGE: FieldName = FieldName::new("transporting_image");
    /// Payment type chosen at dispatch.
    pub const PAYMENT_TYPE: FieldName = FieldName::new("payment_type");
    /// Advance paid at dispatch.
    pub const ADVANCE_AMOUNT: FieldName = FieldName::new("advance_amount");
    /// Verification planned date.
    pub const VERIFICATION_PLANNED: FieldName = FieldName::new("verification_planned");
    /// Verification completion stamp.
    pub const VERIFICATION_ACTUAL: FieldName = FieldName::new("verification_actual");
    /// Return transporter named on the bill.
    pub const BILL_TRANSPORTER_NAME: FieldName = FieldName::new("bill_transporter_name");
    /// Return transportation amount.
    pub const BILL_TRANSPORTATION_AMOUNT: FieldName =
        FieldName::new("bill_transportation_amount");
    /// Bill image reference.
    pub const BILL_IMAGE: FieldName = FieldName::new("bill_image");
    /// Bill number.
    pub const BILL_NO: FieldName = FieldName::new("bill_no");
    /// Bill type.
    pub const BILL_TYPE: FieldName = FieldName::new("bill_type");
    /// Total bill amount.
    pub const TOTAL_BILL_AMOUNT: FieldName = FieldName::new("total_bill_amount");
    /// Bill total minus advance.
    pub const AMOUNT_DUE: FieldName = FieldName::new("amount_due");
    /// Storage planned date.
    pub const STORAGE_PLANNED: FieldName = FieldName::new("storage_planned");
    /// Storage completion stamp.
    pub const STORAGE_ACTUAL: FieldName = FieldName::new("storage_actual");
    /// Storage delay, computed by the sheet.
    pub const STORAGE_DELAY: FieldName = FieldName::new("storage_delay");
    /// Quantity received into store.
    pub const RECEIVED_QUANTITY: FieldName = FieldName::new("received_quantity");
    /// Whether the bill matched the goods.
    pub const BILL_MATCH: FieldName = FieldName::new("bill_match");
    /// Image of the received product.
    pub const PRODUCT_IMAGE: FieldName = FieldName::new("product_image");
    /// Payment planned date.
    pub const PAYMENT_PLANNED: FieldName = FieldName::new("payment_planned");
    /// Payment completion stamp.
    pub const PAYMENT_ACTUAL: FieldName = FieldName::new("payment_actual");
    /// Payment type of the final payment.
    pub const FINAL_PAYMENT_TYPE: FieldName = FieldName::new("final_payment_type");
    /// Amount paid.
    pub const AMOUNT_PAID: FieldName = FieldName::new("amount_paid");
}

/// Fields of the `Service` sheet.
pub mod service {
    use super::FieldName;

    /// Indent timestamp.
    pub const TIMESTAMP: FieldName = FieldName::new("timestamp");
    /// Service number assigned by the sheet.
    pub const SERVICE_NO: FieldName = FieldName::new("service_no");
    /// Person checking the service.
    pub const SERVICE_CHECKER: FieldName = FieldName::new("service_checker");
    /// Machine name.
    pub const MACHINE_NAME: FieldName = FieldName::new("machine_name");
    /// Service vendor.
    pub const VENDOR_NAME: FieldName = FieldName::new("vendor_name");
    /// Work description.
    pub const WORK_DESCRIPTION: FieldName = FieldName::new("work_description");
    /// Service location.
    pub const SERVICE_LOCATION: FieldName = FieldName::new("service_location");
    /// Bill copy reference.
    pub const BILL_COPY_IMAGE: FieldName = FieldName::new("bill_copy_image");
    /// Indent remarks.
    pub const REMARKS: FieldName = FieldName::new("remarks");
    /// Whether a quotation was obtained.
    pub const QUOTATION: FieldName = FieldName::new("quotation");
    /// Quotation image reference.
    pub const QUOTATION_IMAGE: FieldName = FieldName::new("quotation_image");
    /// Total service amount.
    pub const TOTAL_AMOUNT: FieldName = FieldName::new("total_amount");
    /// TDS deducted.
    pub const TDS_DEDUCTION_AMOUNT: FieldName = FieldName::new("tds_deduction_amount");
    /// External parts planned date.
    pub const PARTS_PLANNED: FieldName = FieldName::new("parts_planned");
    /// External parts completion stamp.
    pub const PARTS_ACTUAL: FieldName = FieldName::new("parts_actual");
    /// External parts delay, computed by the sheet.
    pub const PARTS_DELAY: FieldName = FieldName::new("parts_delay");
    /// Parts sourced.
    pub const PARTS_NAME: FieldName = FieldName::new("parts_name");
    /// Parts amount.
    pub const PARTS_AMOUNT: FieldName = FieldName::new("parts_amount");
    /// Parts bill copy reference.
    pub const PARTS_BILL_COPY: FieldName = FieldName::new("parts_bill_copy");
    /// Parts remarks.
    pub const PARTS_REMARKS: FieldName = FieldName::new("parts_remarks");
    /// Payment approval planned date.
    pub const APPROVAL_PLANNED: FieldName = FieldName::new("approval_planned");
    /// Payment approval completion stamp.
    pub const APPROVAL_ACTUAL: FieldName = FieldName::new("approval_actual");
    /// Payment approval delay, computed by the sheet.
    pub const APPROVAL_DELAY: FieldName = FieldName::new("approval_delay");
    /// Approval decision.
    pub const APPROVAL_STATUS: FieldName = FieldName::new("approval_status");
    /// Tally entry planned date.
    pub const TALLY_PLANNED: FieldName = FieldName::new("tally_planned");
    /// Tally entry completion stamp.
    pub const TALLY_ACTUAL: FieldName = FieldName::new("tally_actual");
    /// Tally entry delay, computed by the sheet.
    pub const TALLY_DELAY: FieldName = FieldName::new("tally_delay");
    /// Tally entry remarks.
    pub const TALLY_REMARKS: FieldName = FieldName::new("tally_remarks");
}

/// Fields of the `Repair FMS Advance Payment` sheet.
pub mod ledger {
    use super::FieldName;

    /// Payment timestamp.
    pub const TIMESTAMP: FieldName = FieldName::new("timestamp");
    /// Allocated payment number.
    pub const PAYMENT_NO: FieldName = FieldName::new("payment_no");
    /// Originating repair ticket.
    pub const REPAIR_TASK_NO: FieldName = FieldName::new("repair_task_no");
    /// Machine serial number.
    pub const SERIAL_NO: FieldName = FieldName::new("serial_no");
    /// Machine name.
    pub const MACHINE_NAME: FieldName = FieldName::new("machine_name");
    /// Vendor paid.
    pub const VENDOR_NAME: FieldName = FieldName::new("vendor_name");
    /// Bill number.
    pub const BILL_NO: FieldName = FieldName::new("bill_no");
    /// Total bill amount.
    pub const TOTAL_BILL_AMOUNT: FieldName = FieldName::new("total_bill_amount");
    /// Payment type.
    pub const PAYMENT_TYPE: FieldName = FieldName::new("payment_type");
    /// Amount to pay.
    pub const TO_BE_PAID_AMOUNT: FieldName = FieldName::new("to_be_paid_amount");
    /// Bill match flag.
    pub const BILL_MATCH: FieldName = FieldName::new("bill_match");
}

const REPAIR_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(repair::TIMESTAMP, 0),
    ColumnSpec::new(repair::TASK_NO, 1),
    ColumnSpec::new(repair::SERIAL_NO, 2),
    ColumnSpec::new(repair::MACHINE_NAME, 3),
    ColumnSpec::new(repair::MACHINE_PART_NAME, 4),
    ColumnSpec::new(repair::GIVEN_BY, 5),
    ColumnSpec::new(repair::DOER_NAME, 6),
    ColumnSpec::new(repair::PROBLEM, 7),
    ColumnSpec::new(repair::ENABLE_REMINDER, 8),
    ColumnSpec::new(repair::REQUIRE_ATTACHMENT, 9),
    ColumnSpec::new(repair::TASK_START_DATE, 10),
    ColumnSpec::new(repair::TASK_END_DATE, 11),
    ColumnSpec::new(repair::PRIORITY, 12),
    ColumnSpec::new(repair::DEPARTMENT, 13),
    ColumnSpec::new(repair::LOCATION, 14),
    ColumnSpec::new(repair::IMAGE_URL, 15),
    ColumnSpec::new(repair::DISPATCH_PLANNED, 16),
    ColumnSpec::new(repair::DISPATCH_ACTUAL, 17),
    ColumnSpec::new(repair::DISPATCH_DELAY, 18),
    ColumnSpec::new(repair::VENDOR_NAME, 19),
    ColumnSpec::new(repair::LEAD_TIME_DAYS, 20),
    ColumnSpec::new(repair::TRANSPORTER_NAME, 21),
    ColumnSpec::new(repair::TRANSPORTATION_CHARGES, 22),
    ColumnSpec::new(repair::WEIGHMENT_SLIP, 23),
    ColumnSpec::new(repair::TRANSPORTING_IMAGE, 24),
    ColumnSpec::new(repair::PAYMENT_TYPE, 25),
    ColumnSpec::new(repair::ADVANCE_AMOUNT, 26),
    ColumnSpec::new(repair::VERIFICATION_PLANNED, 27),
    ColumnSpec::new(repair::VERIFICATION_ACTUAL, 28),
    ColumnSpec::new(repair::BILL_TRANSPORTER_NAME, 30),
    ColumnSpec::new(repair::BILL_TRANSPORTATION_AMOUNT, 31),
    ColumnSpec::new(repair::BILL_IMAGE, 32),
    ColumnSpec::new(repair::BILL_NO, 33),
    ColumnSpec::new(repair::BILL_TYPE, 34),
    ColumnSpec::new(repair::TOTAL_BILL_AMOUNT, 35),
    ColumnSpec::new(repair::AMOUNT_DUE, 36),
    ColumnSpec::new(repair::STORAGE_PLANNED, 37),
    ColumnSpec::new(repair::STORAGE_ACTUAL, 38),
    ColumnSpec::new(repair::STORAGE_DELAY, 39),
    ColumnSpec::new(repair::RECEIVED_QUANTITY, 40),
    ColumnSpec::new(repair::BILL_MATCH, 41),
    ColumnSpec::new(repair::PRODUCT_IMAGE, 42),
    ColumnSpec::new(repair::PAYMENT_PLANNED, 43),
    ColumnSpec::new(repair::PAYMENT_ACTUAL, 44),
    ColumnSpec::new(repair::FINAL_PAYMENT_TYPE, 46),
    ColumnSpec::new(repair::AMOUNT_PAID, 47),
];

const SERVICE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(service::TIMESTAMP, 0),
    ColumnSpec::new(service::SERVICE_NO, 1),
    ColumnSpec::new(service::SERVICE_CHECKER, 2),
    ColumnSpec::new(service::MACHINE_NAME, 3),
    ColumnSpec::new(service::VENDOR_NAME, 4),
    ColumnSpec::new(service::WORK_DESCRIPTION, 5),
    ColumnSpec::new(service::SERVICE_LOCATION, 6),
    ColumnSpec::new(service::BILL_COPY_IMAGE, 7),
    ColumnSpec::new(service::REMARKS, 8),
    ColumnSpec::new(service::QUOTATION, 9),
    ColumnSpec::new(service::QUOTATION_IMAGE, 10),
    ColumnSpec::new(service::TOTAL_AMOUNT, 11),
    ColumnSpec::new(service::TDS_DEDUCTION_AMOUNT, 12),
    ColumnSpec::new(service::PARTS_PLANNED, 13),
    ColumnSpec::new(service::PARTS_ACTUAL, 14),
    ColumnSpec::new(service::PARTS_DELAY, 15),
    ColumnSpec::new(service::PARTS_NAME, 16),
    ColumnSpec::new(service::PARTS_AMOUNT, 17),
    ColumnSpec::new(service::PARTS_BILL_COPY, 18),
    ColumnSpec::new(service::PARTS_REMARKS, 19),
    ColumnSpec::new(service::APPROVAL_PLANNED, 20),
    ColumnSpec::new(service::APPROVAL_ACTUAL, 21),
    ColumnSpec::new(service::APPROVAL_DELAY, 22),
    ColumnSpec::new(service::APPROVAL_STATUS, 23),
    ColumnSpec::new(service::TALLY_PLANNED, 24),
    ColumnSpec::new(service::TALLY_ACTUAL, 25),
    ColumnSpec::new(service::TALLY_DELAY, 26),
    ColumnSpec::new(service::TALLY_REMARKS, 27),
];

const LEDGER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(ledger::TIMESTAMP, 0),
    ColumnSpec::new(ledger::PAYMENT_NO, 1),
    ColumnSpec::new(ledger::REPAIR_TASK_NO, 2),
    ColumnSpec::new(ledger::SERIAL_NO, 3),
    ColumnSpec::new(ledger::MACHINE_NAME, 4),
    ColumnSpec::new(ledger::VENDOR_NAME, 5),
    ColumnSpec::new(ledger::BILL_NO, 6),
    ColumnSpec::new(ledger::TOTAL_BILL_AMOUNT, 7),
    ColumnSpec::new(ledger::PAYMENT_TYPE, 8),
    ColumnSpec::new(ledger::TO_BE_PAID_AMOUNT, 9),
    ColumnSpec::new(ledger::BILL_MATCH, 10),
];

/// Repair pipeline sheet: five meta rows and one header row.
pub static REPAIR_SYSTEM: SheetSchema = SheetSchema::new(SheetKind::RepairSystem, 1, 6, REPAIR_COLUMNS)
    .with_search_fields(&[
        repair::TASK_NO,
        repair::SERIAL_NO,
        repair::MACHINE_NAME,
        repair::GIVEN_BY,
        repair::DOER_NAME,
        repair::VENDOR_NAME,
    ])
    .with_owner_field(repair::GIVEN_BY);

/// Service ticket sheet: five meta rows and one header row.
pub static SERVICE: SheetSchema = SheetSchema::new(SheetKind::Service, 1, 6, SERVICE_COLUMNS)
    .with_search_fields(&[
        service::SERVICE_NO,
        service::SERVICE_CHECKER,
        service::MACHINE_NAME,
        service::VENDOR_NAME,
        service::WORK_DESCRIPTION,
    ]);

/// Payment ledger sheet: four meta rows and one header row.
pub static PAYMENT_LEDGER: SheetSchema =
    SheetSchema::new(SheetKind::PaymentLedger, 1, 5, LEDGER_COLUMNS).with_search_fields(&[
        ledger::PAYMENT_NO,
        ledger::REPAIR_TASK_NO,
        ledger::MACHINE_NAME,
        ledger::VENDOR_NAME,
    ]);

/// Returns the schema describing `kind`.
#[must_use]
pub const fn schema_for(kind: SheetKind) -> &'static SheetSchema {
    match kind {
        SheetKind::RepairSystem => &REPAIR_SYSTEM,
        SheetKind::Service => &SERVICE,
        SheetKind::PaymentLedger => &PAYMENT_LEDGER,
    }
}
