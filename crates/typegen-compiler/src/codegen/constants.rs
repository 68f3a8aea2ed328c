//! Fixed declaration text shared by every generated document.

pub const EXPORT_COMMENT: &str = "/**
* This file was @generated using typegen
*/";

pub const IMPORTS: &str = "import type PocketBase from 'pocketbase'
import type {
\tListResult,
\tRecordFullListOptions,
\tRecordListOptions,
\tRecordOptions,
\tRecordService,
} from 'pocketbase'";

pub const COLLECTION_TYPES_COMMENT: &str = "// Record types for each collection
// Response types include system fields and match responses from the PocketBase API";

pub const ALL_RECORD_RESPONSE_COMMENT: &str =
    "// Types containing all Records and Responses, useful for creating typing helper functions";

pub const DATE_STRING_TYPE_NAME: &str = "IsoDateString";
pub const AUTODATE_STRING_TYPE_NAME: &str = "IsoAutoDateString";
pub const RECORD_ID_STRING_NAME: &str = "RecordIdString";
pub const HTML_STRING_NAME: &str = "HTMLString";
pub const GEO_POINT_TYPE_NAME: &str = "GeoPoint";

pub const BASE_SYSTEM_FIELDS_NAME: &str = "BaseSystemFields";
pub const AUTH_SYSTEM_FIELDS_NAME: &str = "AuthSystemFields";

/// Base name of the expansion generic parameter (`Texpand`).
pub const EXPAND_GENERIC_NAME: &str = "expand";

pub const ALIAS_TYPE_DEFINITIONS: &str = "// Alias types for improved usability
export type IsoDateString = string
export type IsoAutoDateString = string & { readonly auto: unique symbol }
export type RecordIdString = string
export type HTMLString = string
export type GeoPoint = {
\tlon: number
\tlat: number
}";

pub const BASE_SYSTEM_FIELDS_DEFINITION: &str = "// System fields
export type BaseSystemFields<T = unknown> = {
\tid: RecordIdString
\tcollectionId: string
\tcollectionName: Collections
\texpand?: T
}";

pub const AUTH_SYSTEM_FIELDS_DEFINITION: &str = "export type AuthSystemFields<T = unknown> = {
\temail: string
\temailVisibility: boolean
\tusername: string
\tverified: boolean
} & BaseSystemFields<T>";

pub const SYSTEM_CREATE_UPDATE_DEFINITIONS: &str = "// Create and update payloads
export type BaseSystemCreateFields = {
\tid?: RecordIdString
}

export type BaseSystemUpdateFields = unknown

export type AuthSystemCreateFields = {
\tid?: RecordIdString
\temail: string
\temailVisibility?: boolean
\tpassword: string
\tpasswordConfirm: string
\tverified?: boolean
}

export type AuthSystemUpdateFields = {
\temail?: string
\temailVisibility?: boolean
\toldPassword?: string
\tpassword?: string
\tpasswordConfirm?: string
\tverified?: boolean
}";

pub const UTILITY_TYPES: &str = "// Utility types for create and update operations

type IsAuthCollection<T extends keyof CollectionResponses> =
\tCollectionResponses[T] extends AuthSystemFields<any> ? true : false

type OmitAutodate<T> = {
\t[K in keyof T as T[K] extends IsoAutoDateString ? never : K]: T[K]
}

export type CreateAuth<T> = OmitAutodate<Omit<T, 'id'>> & AuthSystemCreateFields
export type CreateBase<T> = OmitAutodate<Omit<T, 'id'>> & BaseSystemCreateFields
export type UpdateAuth<T> = Partial<Omit<T, keyof AuthSystemFields>> & AuthSystemUpdateFields
export type UpdateBase<T> = Partial<Omit<T, keyof BaseSystemFields>> & BaseSystemUpdateFields

export type Create<T extends keyof CollectionResponses> =
\tIsAuthCollection<T> extends true
\t\t? CreateAuth<CollectionRecords[T]>
\t\t: CreateBase<CollectionRecords[T]>

export type Update<T extends keyof CollectionResponses> =
\tIsAuthCollection<T> extends true
\t\t? UpdateAuth<CollectionRecords[T]>
\t\t: UpdateBase<CollectionRecords[T]>";

pub const TYPED_POCKETBASE_COMMENT: &str = "// Type for usage with type asserted PocketBase instance
// https://github.com/pocketbase/js-sdk#specify-typescript-definitions";

/// Last `collection()` overload: any collection name, without expand inference.
pub const GENERIC_COLLECTION_OVERLOAD: &str = "\tcollection<T extends keyof CollectionResponses>(
\t\tidOrName: T
\t): RecordService<CollectionResponses[T]>";

pub const ENHANCED_RECORD_SERVICE_DEFINITION: &str = "// Read methods whose response type follows the `expand` option
export type EnhancedRecordService<TCollection extends Collections> = {
\tgetOne<TExpand extends string = \"\">(
\t\tid: string,
\t\toptions?: RecordOptions & { expand?: TExpand }
\t): Promise<GetResponseType<TCollection, TExpand>>
\tgetList<TExpand extends string = \"\">(
\t\tpage?: number,
\t\tperPage?: number,
\t\toptions?: RecordListOptions & { expand?: TExpand }
\t): Promise<ListResult<GetResponseType<TCollection, TExpand>>>
\tgetFullList<TExpand extends string = \"\">(
\t\toptions?: RecordFullListOptions & { expand?: TExpand }
\t): Promise<GetResponseType<TCollection, TExpand>[]>
\tgetFirstListItem<TExpand extends string = \"\">(
\t\tfilter: string,
\t\toptions?: RecordListOptions & { expand?: TExpand }
\t): Promise<GetResponseType<TCollection, TExpand>>
}";
